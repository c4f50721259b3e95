//! Recording callbacks.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_scene::{NodeId, Scene};
use tactile_ui::{ButtonCallback, ButtonEvent, Cue, EventHook, RejectReason};

/// A single recorded tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub owner: NodeId,
    pub button: NodeId,
    /// Scene frame the callback ran in.
    pub frame: u64,
}

/// Records every invocation of the callback it hands out.
#[derive(Clone, Default)]
pub struct TapRecorder {
    taps: Rc<RefCell<Vec<Tap>>>,
}

impl TapRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> ButtonCallback {
        let taps = Rc::clone(&self.taps);
        Rc::new(move |scene: &mut Scene, owner: NodeId, button: NodeId| {
            taps.borrow_mut().push(Tap {
                owner,
                button,
                frame: scene.time().frame_count(),
            });
        })
    }

    pub fn taps(&self) -> Vec<Tap> {
        self.taps.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.taps.borrow().len()
    }

    pub fn clear(&self) {
        self.taps.borrow_mut().clear();
    }
}

/// Records every event reported through the hook it hands out.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<ButtonEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hook(&self) -> EventHook {
        let events = Rc::clone(&self.events);
        Rc::new(move |event: &ButtonEvent| events.borrow_mut().push(*event))
    }

    pub fn events(&self) -> Vec<ButtonEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: ButtonEvent) -> usize {
        self.events.borrow().iter().filter(|&&e| e == event).count()
    }

    pub fn count_cues(&self, cue: Cue) -> usize {
        self.count(ButtonEvent::Cue(cue))
    }

    pub fn count_rejections(&self, reason: RejectReason) -> usize {
        self.count(ButtonEvent::Rejected(reason))
    }

    pub fn last_rejection(&self) -> Option<RejectReason> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ButtonEvent::Rejected(reason) => Some(*reason),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_recorder_shares_log() {
        let recorder = TapRecorder::new();
        let callback = recorder.callback();
        let mut scene = Scene::new();

        callback(&mut scene, NodeId(1), NodeId(2));
        callback(&mut scene, NodeId(1), NodeId(2));

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.taps()[0].owner, NodeId(1));
        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_event_recorder_counts() {
        let recorder = EventRecorder::new();
        let hook = recorder.hook();

        hook(&ButtonEvent::Pressed);
        hook(&ButtonEvent::Cue(Cue::Focus));
        hook(&ButtonEvent::Rejected(RejectReason::Hidden));

        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.count(ButtonEvent::Pressed), 1);
        assert_eq!(recorder.count_cues(Cue::Focus), 1);
        assert_eq!(recorder.last_rejection(), Some(RejectReason::Hidden));
    }
}
