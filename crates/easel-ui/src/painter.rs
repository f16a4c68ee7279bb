//! Draw-pass façade over a [`Canvas`] plus the font store.
//!
//! Widgets never talk to the canvas directly; the painter adds the current
//! translation so containers can draw children in local coordinates, and
//! routes text through the [`FontStore`].

use easel_core::coords::{Rect, Vec2};
use easel_core::paint::Color;
use easel_core::surface::{Canvas, Pixmap};
use easel_core::text::{FontId, FontStore};

pub struct Painter<'a> {
    canvas: &'a mut dyn Canvas,
    fonts: &'a FontStore,
    origin: Vec2,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, fonts: &'a FontStore) -> Self {
        Self {
            canvas,
            fonts,
            origin: Vec2::zero(),
        }
    }

    /// Size of the underlying canvas in pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.canvas.size()
    }

    /// The font store this painter renders text with.
    #[inline]
    pub fn fonts(&self) -> &'a FontStore {
        self.fonts
    }

    /// Runs `f` with every draw call shifted by `delta`. Nested offsets
    /// accumulate.
    pub fn offset<R>(&mut self, delta: Vec2, f: impl FnOnce(&mut Self) -> R) -> R {
        self.origin += delta;
        let out = f(self);
        self.origin -= delta;
        out
    }

    // ── shapes ──────────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.canvas.fill_rect(rect.translated(self.origin), color, radius);
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, radius: f32) {
        self.canvas
            .stroke_rect(rect.translated(self.origin), color, width, radius);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.canvas.fill_circle(center + self.origin, radius, color);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.canvas
            .line(from + self.origin, to + self.origin, width, color);
    }

    pub fn blit(&mut self, pixmap: &Pixmap, at: Vec2) {
        self.canvas.blit(pixmap, at + self.origin);
    }

    /// Blits only `window` (a rect in `pixmap`'s own coordinates) of the
    /// pixmap, with the window's top-left landing at `at`.
    pub fn blit_window(&mut self, pixmap: &Pixmap, window: Rect, at: Vec2) {
        self.canvas.blit_window(pixmap, window, at + self.origin);
    }

    // ── text ────────────────────────────────────────────────────────────────

    /// Draws `text` with its top-left at `at`. When `max_width` is given
    /// the run is cut off at that width instead of spilling over.
    pub fn text(
        &mut self,
        text: &str,
        font: FontId,
        size: f32,
        color: Color,
        at: Vec2,
        max_width: Option<f32>,
    ) {
        if text.is_empty() {
            return;
        }
        let Some(run) = self.fonts.raster(text, font, size, color) else {
            return;
        };
        let at = at + self.origin;
        match max_width {
            Some(w) if (run.width() as f32) > w => {
                let window = Rect::new(0.0, 0.0, w, run.height() as f32);
                self.canvas.blit_window(&run, window, at);
            }
            _ => self.canvas.blit(&run, at),
        }
    }

    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }

    #[inline]
    pub fn line_height(&self, font: FontId, size: f32) -> f32 {
        self.fonts.line_height(font, size)
    }
}

// ── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::text::FontStore;

    #[test]
    fn offset_translates_and_restores() {
        let (fonts, _) = FontStore::with_builtin();
        let mut pm = Pixmap::new(10, 10);
        let mut p = Painter::new(&mut pm, &fonts);

        p.offset(Vec2::new(4.0, 4.0), |p| {
            p.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::white(), 0.0);
        });
        // Drawn at the offset position...
        assert_eq!(pm.pixel(4, 4), Some(Color::white()));
        assert_eq!(pm.pixel(0, 0), Some(Color::transparent()));

        // ...and the offset does not leak past the scope.
        let mut p = Painter::new(&mut pm, &fonts);
        p.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::white(), 0.0);
        assert_eq!(pm.pixel(0, 0), Some(Color::white()));
    }

    #[test]
    fn text_respects_max_width() {
        let (fonts, font) = FontStore::with_builtin();
        let mut pm = Pixmap::new(64, 16);
        let mut p = Painter::new(&mut pm, &fonts);

        // "HHHH" at size 8 is 32px wide; cap it at 16px. The left stem of
        // each glyph sits in column 1 of its cell.
        p.text("HHHH", font, 8.0, Color::white(), Vec2::zero(), Some(16.0));
        let lit = |x: u32| pm.pixel(x, 2).map(|c| c.a != 0).unwrap_or(false);
        assert!(lit(1));
        assert!(lit(9));
        assert!(!lit(17));
    }
}
