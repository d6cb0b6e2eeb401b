//! 2D Mathematics Library
//!
//! This crate provides the 2D vector type shared by every Fear The Dead crate.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (scene units, y axis up)

mod vec2;

pub use vec2::Vec2;
