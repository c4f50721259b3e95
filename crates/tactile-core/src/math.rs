//! Math types backed by [`glam`].
//!
//! Widget code works in world space with `f32` precision, so only the 2D
//! subset is re-exported here.
//!
//! ```
//! use tactile_core::math::Vec2;
//!
//! let down = Vec2::new(10.0, 20.0);
//! let up = Vec2::new(13.0, 24.0);
//! assert_eq!(down.distance_squared(up), 25.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Affine2, Vec2};
