//! Single-line text entry.

use easel_core::coords::{Rect, Vec2};
use easel_core::input::Key;
use easel_core::paint::Color;
use easel_core::text::FontId;

use crate::input::InputCtx;
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::press::PressTracker;
use crate::widgets::text_edit::EditState;

/// An editable text field.
///
/// Clicking inside activates it (caret jumps to the end); clicking
/// anywhere else, or pressing Enter, deactivates it. Only the active
/// field consumes keyboard events.
pub struct TextInput {
    center: Vec2,
    length: f32,
    font: FontId,
    font_size: f32,
    edit: EditState,
    active: bool,
    press: PressTracker,
    reject: Vec<char>,
    background: Color,
    foreground: Color,
    border: Color,
    border_width: f32,
    corner_radius: f32,
    padding: f32,
}

impl TextInput {
    /// A field `length` wide, centered on `center`. The height follows
    /// the font size.
    pub fn new(center: Vec2, length: f32, font: FontId) -> Self {
        Self {
            center,
            length,
            font,
            font_size: 20.0,
            edit: EditState::default(),
            active: false,
            press: PressTracker::new(),
            reject: Vec::new(),
            background: Color::rgb(0xe7, 0xe7, 0xe7),
            foreground: Color::black(),
            border: Color::black(),
            border_width: 1.0,
            corner_radius: 4.0,
            padding: 2.0,
        }
    }

    // ── builders ────────────────────────────────────────────────────────────

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.edit = EditState::new(text);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Characters the field refuses to accept, from typing and pasting
    /// alike. Control characters are always refused.
    pub fn reject(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.reject = chars.into_iter().collect();
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = color;
        self.border_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    // ── state ───────────────────────────────────────────────────────────────

    /// Field bounds, derived from center, length and font size.
    pub fn rect(&self) -> Rect {
        let size = Vec2::new(self.length, self.font_size * 1.5);
        Rect::from_origin_size(self.center - size * 0.5, size)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if active {
            self.edit.caret_to_end();
        }
    }

    #[inline]
    pub fn current_text(&self) -> &str {
        self.edit.text()
    }

    /// Replaces the content without touching activation.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.edit.set_text(text);
    }

    fn handle_key(&mut self, ev: easel_core::input::KeyEvent) {
        match ev.key {
            Key::Enter => self.active = false,
            Key::Backspace => {
                self.edit.delete_backward();
            }
            Key::Delete => {
                self.edit.delete_forward();
            }
            Key::Home => self.edit.move_home(),
            Key::End => self.edit.move_end(),
            Key::ArrowLeft if ev.mods.ctrl => self.edit.move_word_left(),
            Key::ArrowLeft => self.edit.move_left(),
            Key::ArrowRight if ev.mods.ctrl => self.edit.move_word_right(),
            Key::ArrowRight => self.edit.move_right(),
            Key::C if ev.mods.ctrl => self.edit.copy_to_clipboard(),
            Key::V if ev.mods.ctrl => {
                self.edit.paste_from_clipboard(&self.reject);
            }
            _ => {
                if let Some(ch) = ev.ch {
                    if !ev.mods.ctrl && !ch.is_control() && !self.reject.contains(&ch) {
                        self.edit.insert_char(ch);
                    }
                }
            }
        }
    }
}

impl Widget for TextInput {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        let rect = self.rect();
        if self.press.press_started(ctx, rect, true) {
            self.active = true;
            self.edit.caret_to_end();
        } else if ctx.pressed() && !rect.contains(ctx.pointer()) {
            // A press elsewhere drops focus even when another widget owns it.
            self.active = false;
        }

        if !self.active {
            return;
        }
        if let Some(ev) = ctx.key() {
            self.handle_key(ev);
        }
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let rect = self.rect();
        painter.fill_rect(rect, self.background, self.corner_radius);
        let border_width = if self.active {
            self.border_width + 1.0
        } else {
            self.border_width
        };
        painter.stroke_rect(rect, self.border, border_width, self.corner_radius);

        let text_h = painter.line_height(self.font, self.font_size);
        let text_y = rect.origin.y + (rect.size.y - text_h) * 0.5;
        let caret_x = painter
            .measure_text(self.edit.prefix(), self.font, self.font_size)
            .x
            + 3.0;

        let caret_screen_x;
        if self.active && caret_x > rect.size.x {
            // Caret ran past the right edge: pin it there and show the
            // tail of the text before it.
            let avail = rect.size.x - 3.0 - self.padding;
            caret_screen_x = rect.origin.x + avail;
            if let Some(run) =
                painter
                    .fonts()
                    .raster(self.edit.prefix(), self.font, self.font_size, self.foreground)
            {
                let window = Rect::new(
                    run.width() as f32 - avail,
                    0.0,
                    avail,
                    run.height() as f32,
                );
                painter.blit_window(&run, window, Vec2::new(rect.origin.x, text_y));
            }
        } else {
            caret_screen_x = rect.origin.x + caret_x;
            painter.text(
                self.edit.text(),
                self.font,
                self.font_size,
                self.foreground,
                Vec2::new(rect.origin.x + self.padding, text_y),
                Some(rect.size.x - self.padding),
            );
        }

        if self.active {
            painter.line(
                Vec2::new(caret_screen_x, rect.origin.y + rect.size.y / 7.0),
                Vec2::new(caret_screen_x, rect.origin.y + rect.size.y * 6.0 / 7.0),
                1.0,
                self.foreground,
            );
        }
    }
}

// ── tests ───────────────────────────────────────────────────────────────────
