//! Actions: small animation programs that run against a single node.
//!
//! An [`Action`] is stepped by the [`ActionManager`](crate::ActionManager)
//! once per frame until it reports completion. Sequences hand any time left
//! over by a finished step to the next step within the same frame, so a chain
//! of short tweens does not drift behind the clock.

use crate::node::Node;
use crate::scene::Scene;
use std::fmt;
use tactile_core::math::Vec2;

/// Deferred call executed with full access to the scene.
pub type SceneCall = Box<dyn FnOnce(&mut Scene)>;

/// Tag used to find and stop a running action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionTag(pub u32);

/// Node state an action may touch while stepping.
pub(crate) struct StepContext<'a> {
    pub node: &'a mut Node,
    pub calls: &'a mut Vec<SceneCall>,
}

/// Linear tween of the node's scale to an absolute target.
///
/// The start scale is read from the node on the first step, not when the
/// action is created.
#[derive(Debug, Clone)]
pub struct ScaleTo {
    duration: f32,
    target: Vec2,
    elapsed: f32,
    start: Option<Vec2>,
    done: bool,
}

impl ScaleTo {
    pub fn new(duration: f32, target: Vec2) -> Self {
        Self {
            duration: duration.max(0.0),
            target,
            elapsed: 0.0,
            start: None,
            done: false,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    fn step(&mut self, cx: &mut StepContext<'_>, dt: f32) -> f32 {
        let start = *self.start.get_or_insert(cx.node.scale);
        let remaining = self.duration - self.elapsed;

        if dt >= remaining {
            self.elapsed = self.duration;
            self.done = true;
            cx.node.scale = self.target;
            return dt - remaining;
        }

        self.elapsed += dt;
        cx.node.scale = start.lerp(self.target, self.elapsed / self.duration);
        0.0
    }
}

/// Run actions one after another.
#[derive(Debug)]
pub struct Sequence {
    steps: Vec<Action>,
    index: usize,
}

impl Sequence {
    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn step(&mut self, cx: &mut StepContext<'_>, mut dt: f32) -> f32 {
        while let Some(current) = self.steps.get_mut(self.index) {
            dt = current.step(cx, dt);
            if !current.is_done() {
                return 0.0;
            }
            self.index += 1;
        }
        dt
    }

    fn is_done(&self) -> bool {
        self.index >= self.steps.len()
    }
}

/// Queue a call against the scene, executed after the frame's actions have
/// been stepped.
pub struct CallFunc {
    call: Option<SceneCall>,
}

impl CallFunc {
    pub fn new(call: impl FnOnce(&mut Scene) + 'static) -> Self {
        Self {
            call: Some(Box::new(call)),
        }
    }

    fn step(&mut self, cx: &mut StepContext<'_>, dt: f32) -> f32 {
        if let Some(call) = self.call.take() {
            cx.calls.push(call);
        }
        dt
    }
}

impl fmt::Debug for CallFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallFunc")
            .field("pending", &self.call.is_some())
            .finish()
    }
}

/// An action runnable on a node.
#[derive(Debug)]
pub enum Action {
    ScaleTo(ScaleTo),
    Sequence(Sequence),
    CallFunc(CallFunc),
}

impl Action {
    /// Linear scale tween to `target` over `duration` seconds.
    pub fn scale_to(duration: f32, target: Vec2) -> Self {
        Action::ScaleTo(ScaleTo::new(duration, target))
    }

    pub fn sequence(steps: impl IntoIterator<Item = Action>) -> Self {
        Action::Sequence(Sequence::new(steps.into_iter().collect()))
    }

    pub fn call(call: impl FnOnce(&mut Scene) + 'static) -> Self {
        Action::CallFunc(CallFunc::new(call))
    }

    /// Advance by `dt` seconds and return the unused part of `dt`.
    pub(crate) fn step(&mut self, cx: &mut StepContext<'_>, dt: f32) -> f32 {
        match self {
            Action::ScaleTo(action) => action.step(cx, dt),
            Action::Sequence(action) => action.step(cx, dt),
            Action::CallFunc(action) => action.step(cx, dt),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Action::ScaleTo(action) => action.done,
            Action::Sequence(action) => action.is_done(),
            Action::CallFunc(action) => action.call.is_none(),
        }
    }
}
