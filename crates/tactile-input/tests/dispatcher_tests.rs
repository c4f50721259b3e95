//! Claim and swallow behaviour of the touch dispatcher.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::geometry::Rect;
use tactile_core::math::Vec2;
use tactile_input::{
    HandleStatus, ListenerOptions, Touch, TouchDispatcher, TouchEvent, TouchId, TouchListener,
};
use tactile_scene::Scene;

const FINGER: TouchId = TouchId(0);

/// Claims touches that begin inside `area` and records every callback.
struct Recorder {
    area: Rect<f32>,
    log: Vec<&'static str>,
}

impl Recorder {
    fn new(area: Rect<f32>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            area,
            log: Vec::new(),
        }))
    }
}

impl TouchListener for Recorder {
    fn on_touch_began(&mut self, touch: &Touch, _scene: &mut Scene) -> bool {
        self.log.push("began");
        self.area.contains(touch.location)
    }

    fn on_touch_moved(&mut self, _touch: &Touch, _scene: &mut Scene) {
        self.log.push("moved");
    }

    fn on_touch_ended(&mut self, _touch: &Touch, _scene: &mut Scene) {
        self.log.push("ended");
    }

    fn on_touch_cancelled(&mut self, _touch: &Touch, _scene: &mut Scene) {
        self.log.push("cancelled");
    }
}

fn register(
    dispatcher: &mut TouchDispatcher,
    listener: &Rc<RefCell<Recorder>>,
    swallow: bool,
) -> tactile_input::ListenerId {
    let weak = Rc::downgrade(listener);
    dispatcher.add_listener(
        weak,
        ListenerOptions {
            swallow,
            priority: 0,
        },
    )
}

fn everywhere() -> Rect<f32> {
    Rect::new(-1000.0, -1000.0, 2000.0, 2000.0)
}

#[test]
fn test_swallowed_claim_hides_touch_from_lower_listeners() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let below = Recorder::new(everywhere());
    let above = Recorder::new(everywhere());
    register(&mut dispatcher, &below, true);
    register(&mut dispatcher, &above, true);

    let status = dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    assert_eq!(status, HandleStatus::consumed());
    assert_eq!(above.borrow().log, vec!["began"]);
    assert!(below.borrow().log.is_empty());
}

#[test]
fn test_non_swallowing_claim_lets_touch_through() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let below = Recorder::new(everywhere());
    let above = Recorder::new(everywhere());
    register(&mut dispatcher, &below, true);
    register(&mut dispatcher, &above, false);

    let status = dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    assert!(status.is_consumed());
    assert_eq!(above.borrow().log, vec!["began"]);
    assert_eq!(below.borrow().log, vec!["began"]);
    assert_eq!(dispatcher.claimants(FINGER).len(), 2);
}

#[test]
fn test_rejected_touch_falls_through() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let below = Recorder::new(everywhere());
    let above = Recorder::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    register(&mut dispatcher, &below, true);
    register(&mut dispatcher, &above, true);

    dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::new(50.0, 50.0)), &mut scene);
    dispatcher.dispatch(&TouchEvent::moved(FINGER, Vec2::new(51.0, 50.0)), &mut scene);
    dispatcher.dispatch(&TouchEvent::ended(FINGER, Vec2::new(51.0, 50.0)), &mut scene);

    assert_eq!(above.borrow().log, vec!["began"]);
    assert_eq!(below.borrow().log, vec!["began", "moved", "ended"]);
    assert!(dispatcher.claimants(FINGER).is_empty());
}

#[test]
fn test_unclaimed_gesture_is_ignored() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let only = Recorder::new(Rect::new(0.0, 0.0, 1.0, 1.0));
    register(&mut dispatcher, &only, true);

    let began = dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::splat(5.0)), &mut scene);
    let ended = dispatcher.dispatch(&TouchEvent::ended(FINGER, Vec2::splat(5.0)), &mut scene);

    assert_eq!(began, HandleStatus::ignored());
    assert_eq!(ended, HandleStatus::ignored());
    assert_eq!(only.borrow().log, vec!["began"]);
}

#[test]
fn test_priority_orders_dispatch() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let late = Recorder::new(everywhere());
    let early = Recorder::new(everywhere());

    let late_weak = Rc::downgrade(&late);
    dispatcher.add_listener(
        late_weak,
        ListenerOptions {
            swallow: true,
            priority: 10,
        },
    );
    let early_weak = Rc::downgrade(&early);
    dispatcher.add_listener(
        early_weak,
        ListenerOptions {
            swallow: true,
            priority: -10,
        },
    );

    dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    assert_eq!(early.borrow().log, vec!["began"]);
    assert!(late.borrow().log.is_empty());
}

#[test]
fn test_removed_listener_loses_claim() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let listener = Recorder::new(everywhere());
    let id = register(&mut dispatcher, &listener, true);

    dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    assert!(dispatcher.remove_listener(id));
    dispatcher.dispatch(&TouchEvent::ended(FINGER, Vec2::ZERO), &mut scene);

    assert_eq!(listener.borrow().log, vec!["began"]);
    assert!(!dispatcher.contains(id));
}

#[test]
fn test_disabled_listener_is_skipped() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let listener = Recorder::new(everywhere());
    let id = register(&mut dispatcher, &listener, true);

    dispatcher.set_enabled(id, false);
    dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    assert!(listener.borrow().log.is_empty());
}

#[test]
fn test_dropped_listener_is_pruned() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let listener = Recorder::new(everywhere());
    register(&mut dispatcher, &listener, true);
    drop(listener);

    dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    assert_eq!(dispatcher.listener_count(), 0);
}

#[test]
fn test_cancel_reaches_claimant() {
    let mut scene = Scene::new();
    let mut dispatcher = TouchDispatcher::new();
    let listener = Recorder::new(everywhere());
    register(&mut dispatcher, &listener, true);

    dispatcher.dispatch(&TouchEvent::began(FINGER, Vec2::ZERO), &mut scene);
    dispatcher.dispatch(&TouchEvent::cancelled(FINGER, Vec2::ZERO), &mut scene);

    assert_eq!(listener.borrow().log, vec!["began", "cancelled"]);
    assert!(dispatcher.claimants(FINGER).is_empty());
}
