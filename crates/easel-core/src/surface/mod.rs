//! Render targets.
//!
//! [`Canvas`] is the drawing vocabulary the widget layer speaks; [`Pixmap`]
//! is the bundled software implementation and also serves as the pixel
//! source for blits.

mod canvas;
mod pixmap;

pub use canvas::Canvas;
pub use pixmap::Pixmap;
