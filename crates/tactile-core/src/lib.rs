//! Tactile Core
//!
//! This crate contains the shared building blocks for the Tactile toolkit:
//! geometry, math re-exports, hash collections, logging, profiling and
//! configuration.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
