use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::Pixmap;

/// Drawing operations a render target must provide.
///
/// The widget layer draws exclusively through this trait, so a host can
/// substitute its own target for the bundled [`Pixmap`]. All coordinates are
/// surface pixels with the origin at the top-left; pixels are considered hit
/// when their center falls inside the drawn shape.
pub trait Canvas {
    /// Target size in pixels.
    fn size(&self) -> Vec2;

    /// Solid rectangle. `radius` rounds the corners; pass `0.0` for sharp ones.
    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32);

    /// Rectangle outline of `width` pixels drawn just inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, radius: f32);

    /// Solid circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Line segment of `width` pixels.
    ///
    /// Axis-aligned lines cover the pixel run starting at `from` (matching
    /// integer-coordinate drawing), so a width-1 vertical line at `x` fills
    /// exactly column `x`.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);

    /// Copies the whole of `src` with its top-left at `at`.
    fn blit(&mut self, src: &Pixmap, at: Vec2);

    /// Copies the `window` sub-rectangle of `src` with its top-left at `at`.
    ///
    /// The window is clamped to `src`'s bounds; the copy is clipped to the
    /// target. This is the primitive scrolled containers use to show a
    /// viewport of retained content.
    fn blit_window(&mut self, src: &Pixmap, window: Rect, at: Vec2);
}
