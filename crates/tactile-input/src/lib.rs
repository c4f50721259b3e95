//! Tactile Input
//!
//! Single-touch plumbing between the platform and widgets:
//! - [`TouchQueue`] turns raw begin/move/end input into [`TouchEvent`]s and
//!   coalesces move spam within a frame
//! - [`TouchDispatcher`] delivers events one touch at a time to registered
//!   [`TouchListener`]s, honouring the claim and swallow contract

pub mod dispatcher;
pub mod queue;
pub mod touch;

pub use dispatcher::{HandleStatus, ListenerId, ListenerOptions, TouchDispatcher, TouchListener};
pub use queue::{TouchBatch, TouchQueue, TouchStats};
pub use touch::{Touch, TouchEvent, TouchId, TouchPhase};
