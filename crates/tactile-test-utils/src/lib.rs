//! Test utilities for Tactile.
//!
//! - [`TapRecorder`] - a button callback that records every tap
//! - [`EventRecorder`] - an event hook that records every [`ButtonEvent`](tactile_ui::ButtonEvent)
//! - [`ButtonFixture`] - a scene, dispatcher and entered button wired together,
//!   with helpers to press, drag, release and tick
//!
//! # Example
//!
//! ```rust
//! use tactile_test_utils::ButtonFixture;
//!
//! let mut fixture = ButtonFixture::new();
//! assert!(fixture.tap(ButtonFixture::CENTER));
//! fixture.tick(0.5);
//! assert_eq!(fixture.taps.count(), 1);
//! ```
//!
//! Recorders use `Rc<RefCell<..>>` internally so the clone handed to the
//! button and the one kept by the test observe the same log.

pub mod fixture;
pub mod recorder;

pub use fixture::ButtonFixture;
pub use recorder::{EventRecorder, TapRecorder};
