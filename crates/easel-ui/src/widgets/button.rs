//! Click buttons with optional icon.

use easel_core::coords::{Rect, Vec2};
use easel_core::surface::Pixmap;
use easel_core::text::FontId;

use crate::input::InputCtx;
use crate::painter::Painter;
use crate::style::{ButtonStyle, FaceStyle};
use crate::widget::Widget;
use crate::widgets::press::PressTracker;

/// Which face a button shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    Idle,
    Hover,
    Pressed,
    Disabled,
}

/// A push button. Fires once per press cycle, on the press edge.
///
/// The press is reported two ways: through the `on_press` callback, and
/// through [`Button::was_pressed`] which holds for the rest of the frame.
/// Containers that own their buttons poll the latter after `update`.
pub struct Button {
    rect: Rect,
    text: String,
    font: FontId,
    font_size: f32,
    icon: Option<Pixmap>,
    style: ButtonStyle,
    enabled: bool,
    visual: ButtonVisual,
    press: PressTracker,
    fired_frame: bool,
    on_press: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(rect: Rect, font: FontId) -> Self {
        Self {
            rect,
            text: String::new(),
            font,
            font_size: 15.0,
            icon: None,
            style: ButtonStyle::default(),
            enabled: true,
            visual: ButtonVisual::Idle,
            press: PressTracker::new(),
            fired_frame: false,
            on_press: None,
        }
    }

    // ── builders ────────────────────────────────────────────────────────────

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Image drawn above the caption, centered.
    pub fn icon(mut self, icon: Pixmap) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    // ── state ───────────────────────────────────────────────────────────────

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn visual(&self) -> ButtonVisual {
        self.visual
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the last `update` fired the press edge.
    #[inline]
    pub fn was_pressed(&self) -> bool {
        self.fired_frame
    }

    fn face(&self) -> &FaceStyle {
        match self.visual {
            ButtonVisual::Idle => &self.style.idle,
            ButtonVisual::Hover => &self.style.hover,
            ButtonVisual::Pressed => &self.style.pressed,
            ButtonVisual::Disabled => &self.style.disabled,
        }
    }
}

impl Widget for Button {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        self.fired_frame = self.press.press_started(ctx, self.rect, self.enabled);
        if self.fired_frame {
            if let Some(f) = self.on_press.as_mut() {
                f();
            }
        }
        self.visual = if !self.enabled {
            ButtonVisual::Disabled
        } else if self.press.held() {
            ButtonVisual::Pressed
        } else if ctx.hover(self.rect) {
            ButtonVisual::Hover
        } else {
            ButtonVisual::Idle
        };
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let face = *self.face();
        painter.fill_rect(self.rect, face.background, self.style.corner_radius);
        if self.style.border_width > 0.0 {
            painter.stroke_rect(
                self.rect,
                face.border,
                self.style.border_width,
                self.style.corner_radius,
            );
        }

        // Icon above caption, the pair centered as one block.
        let text_size = if self.text.is_empty() {
            Vec2::zero()
        } else {
            painter.measure_text(&self.text, self.font, self.font_size)
        };
        let icon_size = self
            .icon
            .as_ref()
            .map(|i| Vec2::new(i.width() as f32, i.height() as f32))
            .unwrap_or(Vec2::zero());

        let stack = Vec2::new(
            text_size.x.max(icon_size.x),
            icon_size.y + text_size.y + 6.0,
        );
        let stack_origin = self.rect.origin + (self.rect.size - stack) * 0.5;

        if let Some(icon) = &self.icon {
            let at = Vec2::new(
                stack_origin.x + (stack.x - icon_size.x) * 0.5,
                stack_origin.y + 2.0,
            );
            painter.blit(icon, at);
        }
        if !self.text.is_empty() {
            let at = Vec2::new(
                stack_origin.x + (stack.x - text_size.x) * 0.5,
                stack_origin.y + stack.y - 2.0 - text_size.y,
            );
            painter.text(
                &self.text,
                self.font,
                self.font_size,
                face.foreground,
                at,
                None,
            );
        }
    }
}

// ── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn button_at_origin(hits: &Rc<Cell<u32>>) -> Button {
        let (_, font) = easel_core::text::FontStore::with_builtin();
        let hits = Rc::clone(hits);
        Button::new(Rect::new(0.0, 0.0, 40.0, 20.0), font)
            .text("OK")
            .on_press(move || hits.set(hits.get() + 1))
    }

    #[test]
    fn fires_once_on_the_press_edge() {
        let hits = Rc::new(Cell::new(0));
        let mut button = button_at_origin(&hits);
        let mut state = InputState::new();

        let inside = Vec2::new(5.0, 5.0);
        button.update(&mut state.begin_frame(inside, true, None));
        assert_eq!(hits.get(), 1);
        assert!(button.was_pressed());
        assert_eq!(button.visual(), ButtonVisual::Pressed);

        // Held: no second fire.
        button.update(&mut state.begin_frame(inside, true, None));
        assert_eq!(hits.get(), 1);
        assert!(!button.was_pressed());

        // Release, press again: fires again.
        button.update(&mut state.begin_frame(inside, false, None));
        button.update(&mut state.begin_frame(inside, true, None));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn hover_alone_never_fires() {
        let hits = Rc::new(Cell::new(0));
        let mut button = button_at_origin(&hits);
        let mut state = InputState::new();

        button.update(&mut state.begin_frame(Vec2::new(5.0, 5.0), false, None));
        assert_eq!(hits.get(), 0);
        assert_eq!(button.visual(), ButtonVisual::Hover);
    }

    #[test]
    fn disabled_button_ignores_presses() {
        let hits = Rc::new(Cell::new(0));
        let mut button = button_at_origin(&hits);
        button.set_enabled(false);
        let mut state = InputState::new();

        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        button.update(&mut ctx);
        assert_eq!(hits.get(), 0);
        assert_eq!(button.visual(), ButtonVisual::Disabled);
        // The press stays unclaimed for whatever sits beneath.
        assert!(!ctx.claim_taken());
    }

    #[test]
    fn claimed_press_passes_through() {
        let hits = Rc::new(Cell::new(0));
        let mut button = button_at_origin(&hits);
        let mut state = InputState::new();

        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        ctx.claim();
        button.update(&mut ctx);
        assert_eq!(hits.get(), 0);
        assert_eq!(button.visual(), ButtonVisual::Idle);
    }
}
