//! Easel core crate.
//!
//! Owns the primitives the widget layer builds on: geometry, color, logical
//! input types, the software drawing surface and the bitmap text face.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod surface;
pub mod text;
