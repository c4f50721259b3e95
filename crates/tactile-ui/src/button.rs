//! The touch-reactive sprite button.
//!
//! A [`Button`] owns one sprite node and reacts to touches routed to it by a
//! [`TouchDispatcher`]. While a finger is down the node plays scale cues; a
//! release inside the captured bounds queues the tap callback on the owner
//! node, and an optional cooldown then turns new touches away for a while.
//!
//! Buttons are shared as `Rc<RefCell<Button>>`. The dispatcher and the
//! scheduler only ever hold weak references, so dropping the last strong
//! handle quietly retires the button.

use crate::event::{ButtonEvent, RejectReason};
use crate::feedback::{Cue, CuePolicy, FeedbackConfig};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tactile_core::geometry::{Rect, Size};
use tactile_core::math::Vec2;
use tactile_input::{ListenerId, ListenerOptions, Touch, TouchDispatcher, TouchListener};
use tactile_scene::{
    Action, ActionTag, Node, NodeId, Repeat, Scene, SceneResult, TextureSource, TimerCallback,
    TimerKey,
};

/// Tap callback: receives the scene, the owner node and the button node.
pub type ButtonCallback = Rc<dyn Fn(&mut Scene, NodeId, NodeId)>;

/// Observer for [`ButtonEvent`]s.
pub type EventHook = Rc<dyn Fn(&ButtonEvent)>;

const COOL_DOWN_SELECTOR: &str = "cool_down";
const HIGHLIGHT_SELECTOR: &str = "highlight";
const CUE_TAG: ActionTag = ActionTag(0xC0E);

pub struct Button {
    this: Weak<RefCell<Button>>,
    node: NodeId,
    swallow_touches: bool,
    listener: Option<ListenerId>,
    running: bool,

    enabled: bool,
    callback: Option<ButtonCallback>,
    callback_owner: Option<NodeId>,
    base_scale: f32,

    // Gesture state, captured on touch-begin.
    bounding_box: Rect<f32>,
    bounding_touch_point: Vec2,
    touch_down: bool,
    touch_moved: bool,

    cool_down_duration: f32,
    cool_down_elapsed: u32,

    feedback_enabled: bool,
    move_grace_enabled: bool,
    inclusion_region: Option<NodeId>,
    exclusion_region: Option<NodeId>,
    highlight_enabled: bool,
    draggable: bool,

    feedback: FeedbackConfig,
    cue_policy: CuePolicy,
    event_hook: Option<EventHook>,
}

impl Button {
    /// Create a button drawing `texture` and add its node to the scene root.
    ///
    /// The callback only runs when both `callback` and `owner` are set.
    pub fn new(
        scene: &mut Scene,
        texture: &str,
        callback: Option<ButtonCallback>,
        owner: Option<NodeId>,
        swallow_touches: bool,
    ) -> SceneResult<Rc<RefCell<Button>>> {
        let mut builder = Button::builder(texture).swallow_touches(swallow_touches);
        builder.callback = callback;
        builder.callback_owner = owner;
        builder.build(scene)
    }

    pub fn builder(texture: impl Into<String>) -> ButtonBuilder {
        ButtonBuilder::new(texture)
    }

    fn from_parts(this: &Weak<RefCell<Button>>, node: NodeId, builder: ButtonBuilder) -> Self {
        Self {
            this: this.clone(),
            node,
            swallow_touches: builder.swallow_touches,
            listener: None,
            running: false,
            enabled: true,
            callback: builder.callback,
            callback_owner: builder.callback_owner,
            base_scale: builder.scale,
            bounding_box: Rect::ZERO,
            bounding_touch_point: Vec2::ZERO,
            touch_down: false,
            touch_moved: false,
            cool_down_duration: 0.0,
            cool_down_elapsed: 0,
            feedback_enabled: true,
            move_grace_enabled: true,
            inclusion_region: None,
            exclusion_region: None,
            highlight_enabled: false,
            draggable: false,
            feedback: builder.feedback,
            cue_policy: builder.cue_policy,
            event_hook: None,
        }
    }

    /// Activate the button: start listening for touches, capture the rest
    /// scale and apply the highlight setting.
    pub fn on_enter(&mut self, scene: &mut Scene, dispatcher: &mut TouchDispatcher) {
        if self.running {
            tracing::debug!(node = ?self.node, "button already entered");
            return;
        }

        let listener: Weak<RefCell<dyn TouchListener>> = self.this.clone();
        self.listener = Some(dispatcher.add_listener(
            listener,
            ListenerOptions {
                swallow: self.swallow_touches,
                ..Default::default()
            },
        ));
        self.running = true;

        self.base_scale = scene
            .graph
            .get(self.node)
            .map_or(self.base_scale, Node::uniform_scale);
        self.reset_transient_state();

        if self.highlight_enabled {
            self.schedule_highlight(scene);
        }

        tracing::debug!(node = ?self.node, base_scale = self.base_scale, "button entered");
        self.emit(ButtonEvent::Entered);
    }

    /// Deactivate the button and put its node back at rest.
    pub fn on_exit(&mut self, scene: &mut Scene, dispatcher: &mut TouchDispatcher) {
        if !self.running {
            return;
        }

        if let Some(id) = self.listener.take() {
            dispatcher.remove_listener(id);
        }
        scene.scheduler.unschedule(self.cool_down_key());
        scene.scheduler.unschedule(self.highlight_key());
        scene.actions.stop_all(self.node);
        if let Some(node) = scene.graph.get_mut(self.node) {
            node.scale = Vec2::splat(self.base_scale);
        }

        self.reset_transient_state();
        self.highlight_enabled = false;
        self.running = false;

        tracing::debug!(node = ?self.node, "button exited");
        self.emit(ButtonEvent::Exited);
    }

    fn reset_transient_state(&mut self) {
        self.touch_down = false;
        self.touch_moved = false;
        self.cool_down_elapsed = 0;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Cooldown after each tap, in seconds. Zero disables it.
    pub fn set_cool_down(&mut self, seconds: f32) {
        self.cool_down_duration = seconds.max(0.0);
    }

    /// Turn the periodic highlight pulse on or off.
    ///
    /// Exit clears the setting. Enabling while exited is applied on the next
    /// enter; the pulse itself is only scheduled while the button is entered.
    pub fn set_highlight_enabled(&mut self, enabled: bool, scene: &mut Scene) {
        if self.highlight_enabled == enabled {
            return;
        }
        self.highlight_enabled = enabled;
        if !self.running {
            return;
        }

        if enabled {
            self.schedule_highlight(scene);
        } else {
            scene.scheduler.unschedule(self.highlight_key());
        }
    }

    /// Replace the tap callback and its owner.
    pub fn reset_callback(&mut self, callback: Option<ButtonCallback>, owner: Option<NodeId>) {
        self.callback = callback;
        self.callback_owner = owner;
    }

    pub fn clear_callback(&mut self) {
        self.reset_callback(None, None);
    }

    pub fn set_feedback_enabled(&mut self, enabled: bool) {
        self.feedback_enabled = enabled;
    }

    /// When off, a release only taps if it lands close to where the touch began.
    pub fn set_move_grace_enabled(&mut self, enabled: bool) {
        self.move_grace_enabled = enabled;
    }

    /// Only accept touches that begin inside `region`'s world bounds.
    pub fn set_inclusion_region(&mut self, region: Option<NodeId>) {
        self.inclusion_region = region;
    }

    /// Ignore touches that begin inside `region`'s world bounds while it is visible.
    pub fn set_exclusion_region(&mut self, region: Option<NodeId>) {
        self.exclusion_region = region;
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    pub fn set_event_hook(&mut self, hook: Option<EventHook>) {
        self.event_hook = hook;
    }

    pub fn set_cue_policy(&mut self, policy: CuePolicy) {
        self.cue_policy = policy;
    }

    pub fn set_feedback(&mut self, feedback: FeedbackConfig) {
        self.feedback = feedback;
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn cool_down(&self) -> f32 {
        self.cool_down_duration
    }

    pub fn cool_down_elapsed(&self) -> u32 {
        self.cool_down_elapsed
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cool_down_elapsed > 0 && (self.cool_down_elapsed as f32) < self.cool_down_duration
    }

    pub fn is_highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    pub fn callback(&self) -> Option<&ButtonCallback> {
        self.callback.as_ref()
    }

    pub fn callback_owner(&self) -> Option<NodeId> {
        self.callback_owner
    }

    pub fn is_feedback_enabled(&self) -> bool {
        self.feedback_enabled
    }

    pub fn is_move_grace_enabled(&self) -> bool {
        self.move_grace_enabled
    }

    pub fn inclusion_region(&self) -> Option<NodeId> {
        self.inclusion_region
    }

    pub fn exclusion_region(&self) -> Option<NodeId> {
        self.exclusion_region
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn swallows_touches(&self) -> bool {
        self.swallow_touches
    }

    pub fn cue_policy(&self) -> CuePolicy {
        self.cue_policy
    }

    pub fn feedback(&self) -> &FeedbackConfig {
        &self.feedback
    }

    /// Rest scale every cue is relative to.
    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    /// Bounds captured when the current touch began.
    pub fn bounding_box(&self) -> Rect<f32> {
        self.bounding_box
    }

    pub fn bounding_touch_point(&self) -> Vec2 {
        self.bounding_touch_point
    }

    pub fn is_pressed(&self) -> bool {
        self.touch_down
    }

    pub fn is_moved_out(&self) -> bool {
        self.touch_moved
    }

    fn cool_down_key(&self) -> TimerKey {
        TimerKey::new(self.node, COOL_DOWN_SELECTOR)
    }

    fn highlight_key(&self) -> TimerKey {
        TimerKey::new(self.node, HIGHLIGHT_SELECTOR)
    }

    /// Decide whether a touch at `point` may be claimed, returning the
    /// button's current world bounds if so.
    fn admit(&self, point: Vec2, scene: &Scene) -> Result<Rect<f32>, RejectReason> {
        if self.touch_down {
            return Err(RejectReason::AlreadyPressed);
        }

        if let Some(region) = self.inclusion_region {
            if let Ok(bounds) = scene.graph.world_bounding_box(region) {
                if !bounds.contains(point) {
                    return Err(RejectReason::OutsideInclusion);
                }
            }
        }

        if let Some(region) = self.exclusion_region {
            let visible = scene.graph.get(region).is_some_and(|node| node.visible);
            if visible {
                if let Ok(bounds) = scene.graph.world_bounding_box(region) {
                    if bounds.contains(point) {
                        return Err(RejectReason::InsideExclusion);
                    }
                }
            }
        }

        if !scene.graph.is_visible_in_hierarchy(self.node) {
            return Err(RejectReason::Hidden);
        }

        if self.is_cooling_down() {
            return Err(RejectReason::CoolingDown);
        }
        if !self.enabled {
            return Err(RejectReason::Disabled);
        }

        let bounds = scene
            .graph
            .world_bounding_box(self.node)
            .map_err(|_| RejectReason::OutsideBounds)?;
        if !bounds.contains(point) {
            return Err(RejectReason::OutsideBounds);
        }
        Ok(bounds)
    }

    fn run_cue(&self, cue: Cue, scene: &mut Scene) {
        if !self.feedback_enabled {
            return;
        }
        if self.cue_policy == CuePolicy::Replace {
            scene.actions.stop_by_tag(self.node, CUE_TAG);
        }
        let action = self.feedback.pulse(cue).action(self.base_scale);
        scene.actions.run_tagged(self.node, CUE_TAG, action);
        self.emit(ButtonEvent::Cue(cue));
    }

    /// Queue the callback on the owner node's actions.
    fn queue_callback(&self, scene: &mut Scene) {
        let (Some(callback), Some(owner)) = (self.callback.clone(), self.callback_owner) else {
            return;
        };
        if !scene.graph.contains(owner) {
            tracing::debug!(?owner, "callback owner is gone, skipping tap");
            return;
        }
        let button = self.node;
        scene
            .actions
            .run(owner, Action::call(move |scene| callback(scene, owner, button)));
    }

    fn start_cool_down(&mut self, scene: &mut Scene) {
        self.cool_down_elapsed = 1;
        let callback = self.timer_callback(self.cool_down_key(), Button::cool_down_tick);
        scene.scheduler.schedule(
            self.cool_down_key(),
            self.feedback.cool_down_interval,
            Repeat::Forever,
            0.0,
            callback,
        );
        self.emit(ButtonEvent::CoolDownStarted);
    }

    fn cool_down_tick(&mut self, scene: &mut Scene) {
        self.cool_down_elapsed += 1;
        if self.cool_down_elapsed as f32 > self.cool_down_duration {
            self.cool_down_elapsed = 0;
            scene.scheduler.unschedule(self.cool_down_key());
            self.emit(ButtonEvent::CoolDownFinished);
        }
    }

    fn schedule_highlight(&self, scene: &mut Scene) {
        let callback = self.timer_callback(self.highlight_key(), Button::highlight_tick);
        scene.scheduler.schedule(
            self.highlight_key(),
            self.feedback.highlight_period,
            Repeat::Forever,
            self.feedback.highlight_delay,
            callback,
        );
    }

    fn highlight_tick(&mut self, scene: &mut Scene) {
        if self.touch_down {
            tracing::trace!(node = ?self.node, "pressed, skipping highlight");
            return;
        }
        self.run_cue(Cue::Highlight, scene);
    }

    /// Wrap a tick so the timer only holds a weak reference to the button.
    fn timer_callback(&self, key: TimerKey, tick: fn(&mut Button, &mut Scene)) -> TimerCallback {
        let this = self.this.clone();
        Rc::new(move |scene: &mut Scene| {
            let Some(strong) = this.upgrade() else {
                scene.scheduler.unschedule(key);
                return;
            };
            let Ok(mut button) = strong.try_borrow_mut() else {
                tracing::warn!(?key, "button busy, skipping tick");
                return;
            };
            tick(&mut button, scene);
        })
    }

    fn emit(&self, event: ButtonEvent) {
        tracing::trace!(node = ?self.node, ?event, "button event");
        if let Some(hook) = &self.event_hook {
            hook(&event);
        }
    }
}

impl TouchListener for Button {
    fn on_touch_began(&mut self, touch: &Touch, scene: &mut Scene) -> bool {
        match self.admit(touch.location, scene) {
            Err(reason) => {
                tracing::trace!(node = ?self.node, ?reason, "touch rejected");
                self.emit(ButtonEvent::Rejected(reason));
                false
            }
            Ok(bounds) => {
                self.bounding_box = bounds;
                self.bounding_touch_point = touch.location;
                self.touch_down = true;
                self.touch_moved = false;
                self.emit(ButtonEvent::Pressed);
                self.run_cue(Cue::Focus, scene);
                true
            }
        }
    }

    fn on_touch_moved(&mut self, touch: &Touch, scene: &mut Scene) {
        if !self.touch_down {
            return;
        }

        let inside = self.bounding_box.contains(touch.location);
        if !inside && !self.touch_moved {
            self.touch_moved = true;
            self.emit(ButtonEvent::MovedOut);
            self.run_cue(Cue::LoseFocus, scene);
        } else if inside && self.touch_moved {
            self.touch_moved = false;
            self.emit(ButtonEvent::MovedBack);
            self.run_cue(Cue::Focus, scene);
        }
    }

    fn on_touch_ended(&mut self, touch: &Touch, scene: &mut Scene) {
        if !self.touch_down {
            return;
        }

        let inside = self.bounding_box.contains(touch.location);
        self.emit(ButtonEvent::Released { inside });

        if inside {
            let drift = self.bounding_touch_point.distance_squared(touch.location);
            if self.move_grace_enabled || drift < self.feedback.move_tolerance_squared {
                self.queue_callback(scene);
                self.emit(ButtonEvent::Tapped);
            } else {
                tracing::trace!(node = ?self.node, drift, "release drifted too far");
            }
            self.run_cue(Cue::LoseFocus, scene);
        }

        if self.cool_down_duration > 0.0 {
            self.start_cool_down(scene);
        }

        self.touch_moved = false;
        self.touch_down = false;
    }

    fn on_touch_cancelled(&mut self, touch: &Touch, scene: &mut Scene) {
        if !self.touch_down {
            return;
        }

        self.emit(ButtonEvent::Cancelled);
        // Lose-focus already played if the finger left the box.
        if self.bounding_box.contains(touch.location) && !self.touch_moved {
            self.run_cue(Cue::LoseFocus, scene);
        }
        self.touch_moved = false;
        self.touch_down = false;
    }
}

/// Builder for [`Button`].
pub struct ButtonBuilder {
    texture: String,
    name: Option<String>,
    position: Vec2,
    size: Option<Size<f32>>,
    anchor: Option<Vec2>,
    scale: f32,
    parent: Option<NodeId>,
    callback: Option<ButtonCallback>,
    callback_owner: Option<NodeId>,
    swallow_touches: bool,
    feedback: FeedbackConfig,
    cue_policy: CuePolicy,
}

impl ButtonBuilder {
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            name: None,
            position: Vec2::ZERO,
            size: None,
            anchor: None,
            scale: 1.0,
            parent: None,
            callback: None,
            callback_owner: None,
            swallow_touches: true,
            feedback: FeedbackConfig::default(),
            cue_policy: CuePolicy::default(),
        }
    }

    /// Node name. Defaults to the texture identifier.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn size(mut self, size: Size<f32>) -> Self {
        self.size = Some(size);
        self
    }

    pub fn anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Attach the button node under `parent` instead of at the root.
    pub fn parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Tap callback, queued on `owner` when a tap is accepted.
    pub fn callback(
        mut self,
        owner: NodeId,
        callback: impl Fn(&mut Scene, NodeId, NodeId) + 'static,
    ) -> Self {
        self.callback = Some(Rc::new(callback));
        self.callback_owner = Some(owner);
        self
    }

    pub fn swallow_touches(mut self, swallow: bool) -> Self {
        self.swallow_touches = swallow;
        self
    }

    pub fn feedback(mut self, feedback: FeedbackConfig) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn cue_policy(mut self, policy: CuePolicy) -> Self {
        self.cue_policy = policy;
        self
    }

    /// Add the sprite node to `scene` and create the button around it.
    pub fn build(mut self, scene: &mut Scene) -> SceneResult<Rc<RefCell<Button>>> {
        let texture = TextureSource::parse(&self.texture)?;
        let name = self.name.take().unwrap_or_else(|| texture.to_string());

        let mut node = Node::sprite(name, texture)
            .with_position(self.position)
            .with_scale(self.scale);
        if let Some(size) = self.size {
            node = node.with_size(size);
        }
        if let Some(anchor) = self.anchor {
            node = node.with_anchor(anchor);
        }

        let id = match self.parent {
            Some(parent) => scene.graph.add_child(parent, node)?,
            None => scene.graph.add_node(node),
        };
        tracing::debug!(node = ?id, "button created");

        Ok(Rc::new_cyclic(|this| {
            RefCell::new(Button::from_parts(this, id, self))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let mut scene = Scene::new();
        let button = Button::builder("#play").build(&mut scene).unwrap();
        let button = button.borrow();

        assert!(button.is_enabled());
        assert!(button.swallows_touches());
        assert!(button.is_feedback_enabled());
        assert!(button.is_move_grace_enabled());
        assert!(!button.is_highlight_enabled());
        assert!(!button.is_running());
        assert_eq!(button.cue_policy(), CuePolicy::Overlap);
        assert_eq!(button.cool_down(), 0.0);

        let node = scene.graph.node(button.node()).unwrap();
        assert_eq!(node.name, "#play");
        assert_eq!(node.texture, Some(TextureSource::Frame("play".into())));
    }

    #[test]
    fn test_empty_texture_is_rejected() {
        let mut scene = Scene::new();
        assert!(Button::new(&mut scene, "", None, None, true).is_err());
        assert!(scene.graph.is_empty());
    }

    #[test]
    fn test_builder_under_parent() {
        let mut scene = Scene::new();
        let panel = scene.graph.add_node(Node::new("panel"));
        let button = Button::builder("res/ui/ok.png")
            .parent(panel)
            .build(&mut scene)
            .unwrap();

        assert_eq!(scene.graph.parent(button.borrow().node()), Some(panel));
    }

    #[test]
    fn test_cool_down_window() {
        let mut scene = Scene::new();
        let button = Button::builder("#b").build(&mut scene).unwrap();
        let mut button = button.borrow_mut();
        button.set_cool_down(2.0);

        button.cool_down_elapsed = 1;
        assert!(button.is_cooling_down());
        button.cool_down_elapsed = 2;
        assert!(!button.is_cooling_down());
        button.cool_down_elapsed = 0;
        assert!(!button.is_cooling_down());
    }
}
