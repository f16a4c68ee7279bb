//! Color primitives for the software surface.

mod color;

pub use color::Color;
