//! Scheduler behaviour observed through `Scene::update`.
//!
//! Deltas are exact binary fractions so timer arithmetic stays exact.

use std::cell::Cell;
use std::rc::Rc;
use tactile_scene::{Action, Node, Repeat, Scene, TimerKey};

fn counter() -> (Rc<Cell<u32>>, Rc<dyn Fn(&mut Scene)>) {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    (count, Rc::new(move |_: &mut Scene| c.set(c.get() + 1)))
}

#[test]
fn test_repeating_timer_fires_every_interval() {
    let mut scene = Scene::new();
    let node = scene.graph.add_node(Node::new("n"));
    let (count, callback) = counter();

    scene
        .scheduler
        .schedule_repeating(TimerKey::new(node, "tick"), 1.0, callback);

    scene.update(0.5);
    assert_eq!(count.get(), 0);
    scene.update(0.5);
    assert_eq!(count.get(), 1);
    scene.update(2.0);
    assert_eq!(count.get(), 3);
}

#[test]
fn test_initial_delay_then_interval() {
    let mut scene = Scene::new();
    let node = scene.graph.add_node(Node::new("n"));
    let (count, callback) = counter();

    scene.scheduler.schedule(
        TimerKey::new(node, "pulse"),
        2.0,
        Repeat::Forever,
        0.25,
        callback,
    );

    scene.update(0.25);
    assert_eq!(count.get(), 1);
    scene.update(1.75);
    assert_eq!(count.get(), 1);
    scene.update(0.25);
    assert_eq!(count.get(), 2);
}

#[test]
fn test_finite_timer_removes_itself() {
    let mut scene = Scene::new();
    let node = scene.graph.add_node(Node::new("n"));
    let key = TimerKey::new(node, "twice");
    let (count, callback) = counter();

    scene.scheduler.schedule(key, 1.0, Repeat::Times(2), 0.0, callback);
    scene.update(5.0);

    assert_eq!(count.get(), 2);
    assert!(!scene.scheduler.is_scheduled(key));
}

#[test]
fn test_self_cancelling_timer_fires_no_further() {
    let mut scene = Scene::new();
    let node = scene.graph.add_node(Node::new("n"));
    let key = TimerKey::new(node, "once");
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);

    scene.scheduler.schedule_repeating(
        key,
        1.0,
        Rc::new(move |scene: &mut Scene| {
            c.set(c.get() + 1);
            scene.scheduler.unschedule(key);
        }),
    );

    // Three intervals elapse in one frame, but the first firing cancels.
    scene.update(3.0);
    assert_eq!(count.get(), 1);
    scene.update(3.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_rescheduling_active_key_keeps_clock() {
    let mut scene = Scene::new();
    let node = scene.graph.add_node(Node::new("n"));
    let key = TimerKey::new(node, "tick");
    let (count, callback) = counter();

    scene
        .scheduler
        .schedule_repeating(key, 1.0, Rc::clone(&callback));
    scene.update(0.75);
    scene.scheduler.schedule_repeating(key, 1.0, callback);
    scene.update(0.25);

    assert_eq!(count.get(), 1);
    assert_eq!(scene.scheduler.len(), 1);
}

#[test]
fn test_unschedule_all_only_touches_target() {
    let mut scene = Scene::new();
    let a = scene.graph.add_node(Node::new("a"));
    let b = scene.graph.add_node(Node::new("b"));
    let (count, callback) = counter();

    scene
        .scheduler
        .schedule_repeating(TimerKey::new(a, "x"), 1.0, Rc::clone(&callback));
    scene
        .scheduler
        .schedule_repeating(TimerKey::new(a, "y"), 1.0, Rc::clone(&callback));
    scene
        .scheduler
        .schedule_repeating(TimerKey::new(b, "x"), 1.0, callback);

    assert_eq!(scene.scheduler.unschedule_all(a), 2);
    scene.update(1.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_queued_calls_run_after_actions() {
    let mut scene = Scene::new();
    let node = scene.graph.add_node(Node::new("n"));
    let seen = Rc::new(Cell::new(false));
    let s = Rc::clone(&seen);

    scene.actions.run(
        node,
        Action::call(move |scene: &mut Scene| {
            s.set(true);
            scene.graph.set_visible(node, false).unwrap();
        }),
    );
    assert!(!seen.get());

    scene.update(0.0);
    assert!(seen.get());
    assert!(!scene.graph.node(node).unwrap().visible);
}

#[test]
fn test_remove_node_cancels_actions_and_timers() {
    let mut scene = Scene::new();
    let parent = scene.graph.add_node(Node::new("parent"));
    let child = scene.graph.add_child(parent, Node::new("child")).unwrap();
    let (count, callback) = counter();

    scene
        .scheduler
        .schedule_repeating(TimerKey::new(child, "tick"), 1.0, callback);
    scene.actions.run(child, Action::call(|_| {}));

    scene.remove_node(parent).unwrap();
    scene.update(1.0);

    assert_eq!(count.get(), 0);
    assert!(scene.scheduler.is_empty());
    assert!(!scene.actions.is_running(child));
}
