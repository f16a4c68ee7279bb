//! Static text anchored at its left edge.

use easel_core::coords::Vec2;
use easel_core::paint::Color;
use easel_core::text::FontId;

use crate::painter::Painter;
use crate::widget::Widget;

/// A line of text. `position` is the middle of the text's left edge, so
/// labels line up vertically with the widgets they caption.
pub struct Label {
    position: Vec2,
    text: String,
    font: FontId,
    font_size: f32,
    foreground: Color,
    background: Option<Color>,
}

impl Label {
    pub fn new(position: Vec2, text: impl Into<String>, font: FontId) -> Self {
        Self {
            position,
            text: text.into(),
            font,
            font_size: 20.0,
            foreground: Color::black(),
            background: None,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Fills the text's bounding box before drawing it.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn draw(&self, painter: &mut Painter<'_>) {
        let size = painter.measure_text(&self.text, self.font, self.font_size);
        let top_left = Vec2::new(self.position.x, self.position.y - size.y * 0.5);
        if let Some(bg) = self.background {
            painter.fill_rect(
                easel_core::coords::Rect::from_origin_size(top_left, size),
                bg,
                0.0,
            );
        }
        painter.text(
            &self.text,
            self.font,
            self.font_size,
            self.foreground,
            top_left,
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::surface::Pixmap;
    use easel_core::text::FontStore;

    #[test]
    fn anchors_on_the_left_edge_midline() {
        let (fonts, font) = FontStore::with_builtin();
        let mut pm = Pixmap::filled(64, 32, Color::white());

        // Size 8 gives an 8px line; midleft (4, 16) puts the run at y 12..20.
        let label = Label::new(Vec2::new(4.0, 16.0), "A", font).font_size(8.0);
        label.draw(&mut Painter::new(&mut pm, &fonts));

        let any_ink = |y: u32| (0..64).any(|x| pm.pixel(x, y) != Some(Color::white()));
        assert!(!any_ink(11));
        assert!(any_ink(14));
        assert!(!any_ink(20));
    }

    #[test]
    fn background_fills_the_text_box() {
        let (fonts, font) = FontStore::with_builtin();
        let mut pm = Pixmap::filled(64, 32, Color::white());

        let label = Label::new(Vec2::new(0.0, 16.0), "AB", font)
            .font_size(8.0)
            .background(Color::rgb(0xe7, 0xe7, 0xe7));
        label.draw(&mut Painter::new(&mut pm, &fonts));

        // Corner of the 16x8 box at (0, 12): background, not white.
        assert_eq!(pm.pixel(0, 12), Some(Color::rgb(0xe7, 0xe7, 0xe7)));
        assert_eq!(pm.pixel(20, 12), Some(Color::white()));
    }
}
