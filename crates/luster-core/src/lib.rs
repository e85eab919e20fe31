//! Core types for the Luster layout engine.
//!
//! This crate provides the foundational pieces shared by the engine:
//! - Geometric primitives: [`Size`], [`Rect`], [`Edges`]
//! - Configuration errors: [`ConfigError`]

mod error;
mod geometry;

pub use error::ConfigError;
pub use geometry::{Edges, Rect, Size};
