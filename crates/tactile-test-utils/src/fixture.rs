//! A ready-to-poke button.

use crate::recorder::{EventRecorder, TapRecorder};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tactile_core::geometry::Size;
use tactile_core::math::Vec2;
use tactile_input::{HandleStatus, TouchDispatcher, TouchEvent, TouchId};
use tactile_scene::{Node, NodeId, Scene};
use tactile_ui::{Button, ButtonBuilder};

/// Scene, dispatcher and an entered 100x100 button centred on
/// [`ButtonFixture::CENTER`], with a recording callback and event hook.
pub struct ButtonFixture {
    pub scene: Scene,
    pub dispatcher: TouchDispatcher,
    pub button: Rc<RefCell<Button>>,
    /// Node the tap callback is queued on.
    pub owner: NodeId,
    pub taps: TapRecorder,
    pub events: EventRecorder,
    finger: TouchId,
}

impl ButtonFixture {
    pub const CENTER: Vec2 = Vec2::new(100.0, 100.0);
    pub const SIZE: f32 = 100.0;
    /// A point well clear of the button.
    pub const OUTSIDE: Vec2 = Vec2::new(400.0, 400.0);

    pub fn new() -> Self {
        Self::with(|_, builder| builder)
    }

    /// Build the fixture, letting `configure` prepare the scene and adjust
    /// the builder first. Position and size are fixed by the fixture.
    pub fn with(configure: impl FnOnce(&mut Scene, ButtonBuilder) -> ButtonBuilder) -> Self {
        let mut scene = Scene::new();
        let mut dispatcher = TouchDispatcher::new();
        let owner = scene.graph.add_node(Node::new("owner"));
        let taps = TapRecorder::new();
        let events = EventRecorder::new();

        let builder = configure(&mut scene, Button::builder("#fixture"))
            .position(Self::CENTER)
            .size(Size::new(Self::SIZE, Self::SIZE));
        let button = builder
            .build(&mut scene)
            .expect("fixture button should build");
        {
            let mut b = button.borrow_mut();
            b.reset_callback(Some(taps.callback()), Some(owner));
            b.set_event_hook(Some(events.hook()));
            b.on_enter(&mut scene, &mut dispatcher);
        }

        Self {
            scene,
            dispatcher,
            button,
            owner,
            taps,
            events,
            finger: TouchId(0),
        }
    }

    pub fn node(&self) -> NodeId {
        self.button.borrow().node()
    }

    pub fn button(&self) -> Ref<'_, Button> {
        self.button.borrow()
    }

    pub fn button_mut(&self) -> RefMut<'_, Button> {
        self.button.borrow_mut()
    }

    /// Current scale of the button node.
    pub fn scale(&self) -> Vec2 {
        self.scene
            .graph
            .node(self.node())
            .expect("fixture button node should exist")
            .scale
    }

    pub fn enter(&mut self) {
        self.button
            .borrow_mut()
            .on_enter(&mut self.scene, &mut self.dispatcher);
    }

    pub fn exit(&mut self) {
        self.button
            .borrow_mut()
            .on_exit(&mut self.scene, &mut self.dispatcher);
    }

    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        self.button
            .borrow_mut()
            .set_highlight_enabled(enabled, &mut self.scene);
    }

    /// Put a new finger down. Returns whether any listener claimed it.
    pub fn press(&mut self, at: Vec2) -> bool {
        self.finger = TouchId(self.finger.0 + 1);
        self.send(TouchEvent::began(self.finger, at)).is_handled()
    }

    pub fn drag(&mut self, to: Vec2) {
        self.send(TouchEvent::moved(self.finger, to));
    }

    pub fn release(&mut self, at: Vec2) {
        self.send(TouchEvent::ended(self.finger, at));
    }

    pub fn cancel(&mut self, at: Vec2) {
        self.send(TouchEvent::cancelled(self.finger, at));
    }

    /// Press and release at the same point.
    pub fn tap(&mut self, at: Vec2) -> bool {
        let claimed = self.press(at);
        self.release(at);
        claimed
    }

    pub fn send(&mut self, event: TouchEvent) -> HandleStatus {
        self.dispatcher.dispatch(&event, &mut self.scene)
    }

    /// Advance the scene by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.scene.update(dt);
    }
}

impl Default for ButtonFixture {
    fn default() -> Self {
        Self::new()
    }
}
