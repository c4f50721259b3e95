use crate::touch::{Touch, TouchEvent, TouchId, TouchPhase};
use tactile_core::alloc::HashMap;
use tactile_core::math::Vec2;

/// Touch queue with per-frame batching and move coalescing
pub struct TouchQueue {
    /// Pending events for this frame
    pending: Vec<TouchEvent>,

    /// Start and last known location of every active touch
    active: HashMap<TouchId, (Vec2, Vec2)>,

    /// Statistics
    stats: TouchStats,
}

impl TouchQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(16),
            active: HashMap::new(),
            stats: TouchStats::default(),
        }
    }

    pub fn push_began(&mut self, id: TouchId, location: Vec2) {
        self.active.insert(id, (location, location));
        self.push(TouchEvent::began(id, location));
    }

    pub fn push_moved(&mut self, id: TouchId, location: Vec2) {
        let Some(touch) = self.track(id, location) else {
            tracing::trace!(?id, "move for unknown touch ignored");
            return;
        };
        self.push(TouchEvent::new(TouchPhase::Moved, touch));
    }

    pub fn push_ended(&mut self, id: TouchId, location: Vec2) {
        self.finish(TouchPhase::Ended, id, location);
    }

    pub fn push_cancelled(&mut self, id: TouchId, location: Vec2) {
        self.finish(TouchPhase::Cancelled, id, location);
    }

    fn finish(&mut self, phase: TouchPhase, id: TouchId, location: Vec2) {
        let Some(touch) = self.track(id, location) else {
            tracing::trace!(?id, ?phase, "end for unknown touch ignored");
            return;
        };
        self.active.remove(&id);
        self.push(TouchEvent::new(phase, touch));
    }

    fn track(&mut self, id: TouchId, location: Vec2) -> Option<Touch> {
        let (start, last) = self.active.get_mut(&id)?;
        let touch = Touch {
            id,
            location,
            start_location: *start,
            previous_location: *last,
        };
        *last = location;
        Some(touch)
    }

    /// Push an already built event.
    ///
    /// A move directly following a move of the same touch replaces it, keeping
    /// the earlier `previous_location`.
    pub fn push(&mut self, event: TouchEvent) {
        self.stats.events_received += 1;

        if event.phase == TouchPhase::Moved {
            if let Some(last) = self.pending.last_mut() {
                if last.phase == TouchPhase::Moved && last.touch.id == event.touch.id {
                    last.touch.location = event.touch.location;
                    self.stats.events_coalesced += 1;
                    return;
                }
            }
        }

        self.pending.push(event);
    }

    /// Take every pending event, in arrival order
    pub fn drain(&mut self) -> TouchBatch {
        let events = std::mem::take(&mut self.pending);
        self.stats.events_processed += events.len();
        TouchBatch { events }
    }

    /// Number of touches currently down
    pub fn active_touches(&self) -> usize {
        self.active.len()
    }

    pub fn stats(&self) -> &TouchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = TouchStats::default();
    }
}

impl Default for TouchQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TouchBatch {
    events: Vec<TouchEvent>,
}

impl TouchBatch {
    pub fn new(events: Vec<TouchEvent>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl IntoIterator for TouchBatch {
    type Item = TouchEvent;
    type IntoIter = std::vec::IntoIter<TouchEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[derive(Default, Debug, Clone)]
pub struct TouchStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub events_coalesced: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: TouchId = TouchId(1);

    #[test]
    fn test_moves_are_coalesced() {
        let mut queue = TouchQueue::new();
        queue.push_began(FINGER, Vec2::new(0.0, 0.0));
        queue.push_moved(FINGER, Vec2::new(1.0, 0.0));
        queue.push_moved(FINGER, Vec2::new(2.0, 0.0));
        queue.push_moved(FINGER, Vec2::new(3.0, 0.0));

        let batch = queue.drain();
        let phases: Vec<_> = batch.iter().map(|e| e.phase).collect();
        assert_eq!(phases, vec![TouchPhase::Began, TouchPhase::Moved]);

        let moved = batch.iter().nth(1).unwrap().touch;
        assert_eq!(moved.location, Vec2::new(3.0, 0.0));
        assert_eq!(moved.previous_location, Vec2::new(0.0, 0.0));
        assert_eq!(queue.stats().events_coalesced, 2);
    }

    #[test]
    fn test_end_is_never_coalesced_and_clears_touch() {
        let mut queue = TouchQueue::new();
        queue.push_began(FINGER, Vec2::ZERO);
        queue.push_moved(FINGER, Vec2::new(5.0, 5.0));
        queue.push_ended(FINGER, Vec2::new(6.0, 6.0));

        assert_eq!(queue.active_touches(), 0);
        let batch = queue.drain();
        assert_eq!(batch.len(), 3);
        let ended = batch.iter().last().unwrap().touch;
        assert_eq!(ended.start_location, Vec2::ZERO);
        assert_eq!(ended.previous_location, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_unknown_touch_is_ignored() {
        let mut queue = TouchQueue::new();
        queue.push_moved(FINGER, Vec2::ONE);
        queue.push_ended(FINGER, Vec2::ONE);
        assert!(queue.drain().is_empty());
    }
}
