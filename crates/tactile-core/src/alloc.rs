//! Optimized collection types for Tactile.
//!
//! Re-exports AHash based hash collections so every crate in the workspace
//! hashes the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
