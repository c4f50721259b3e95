use tactile_core::math::Vec2;

/// Platform identifier of a finger or pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub u64);

/// Snapshot of a touch, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: TouchId,
    pub location: Vec2,
    pub start_location: Vec2,
    pub previous_location: Vec2,
}

impl Touch {
    /// A touch that has not moved since it started at `location`.
    pub fn new(id: TouchId, location: Vec2) -> Self {
        Self {
            id,
            location,
            start_location: location,
            previous_location: location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touch: Touch,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touch: Touch) -> Self {
        Self { phase, touch }
    }

    pub fn began(id: TouchId, location: Vec2) -> Self {
        Self::new(TouchPhase::Began, Touch::new(id, location))
    }

    pub fn moved(id: TouchId, location: Vec2) -> Self {
        Self::new(TouchPhase::Moved, Touch::new(id, location))
    }

    pub fn ended(id: TouchId, location: Vec2) -> Self {
        Self::new(TouchPhase::Ended, Touch::new(id, location))
    }

    pub fn cancelled(id: TouchId, location: Vec2) -> Self {
        Self::new(TouchPhase::Cancelled, Touch::new(id, location))
    }
}
