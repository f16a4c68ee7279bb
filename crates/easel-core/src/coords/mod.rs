//! Coordinate and geometry types shared across the surface and widget layers.
//!
//! Canonical space:
//! - Surface pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
