//! Observable button events.

use crate::feedback::Cue;

/// Why a touch-begin was not claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The button already owns a touch.
    AlreadyPressed,
    /// Outside the inclusion region.
    OutsideInclusion,
    /// Inside a visible exclusion region.
    InsideExclusion,
    /// The button or one of its ancestors is hidden.
    Hidden,
    /// A previous tap's cooldown is still running.
    CoolingDown,
    /// The button is disabled.
    Disabled,
    /// Outside the button's own bounds.
    OutsideBounds,
}

/// Events reported to a button's event hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonEvent {
    /// The button was entered into the scene.
    Entered,
    /// The button was removed from the scene.
    Exited,
    /// A touch was claimed.
    Pressed,
    /// A touch-begin was turned away.
    Rejected(RejectReason),
    /// The owned touch left the captured bounds.
    MovedOut,
    /// The owned touch came back inside the captured bounds.
    MovedBack,
    /// A tap was accepted; the callback, if any, has been queued.
    Tapped,
    /// The owned touch was lifted.
    Released {
        /// Whether the release point was inside the captured bounds.
        inside: bool,
    },
    /// The owned touch was cancelled by the platform.
    Cancelled,
    /// A scale cue started running.
    Cue(Cue),
    /// The cooldown counter started.
    CoolDownStarted,
    /// The cooldown counter ran past its duration and reset.
    CoolDownFinished,
}
