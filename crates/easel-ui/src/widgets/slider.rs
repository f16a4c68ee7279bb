//! Horizontal value slider.

use easel_core::coords::{Rect, Vec2};
use easel_core::paint::Color;
use easel_core::text::FontId;

use crate::input::InputCtx;
use crate::painter::Painter;
use crate::widget::Widget;

/// Drags an integer value along a horizontal track.
///
/// `position` is the left end of the track. The caption renders above it
/// as `"label: value"`. Values map linearly onto the track and truncate
/// toward `min`, so the full range is only reachable when `length` is at
/// least `max - min` pixels.
pub struct Slider {
    position: Vec2,
    length: f32,
    label: String,
    font: FontId,
    font_size: f32,
    min: i32,
    max: i32,
    value: i32,
    thumb_x: f32,
    dragging: bool,
    color: Color,
    line_width: f32,
}

impl Slider {
    pub fn new(position: Vec2, label: impl Into<String>, font: FontId) -> Self {
        Self {
            position,
            length: 170.0,
            label: label.into(),
            font,
            font_size: 20.0,
            min: 0,
            max: 100,
            value: 0,
            thumb_x: position.x - 4.0,
            dragging: false,
            color: Color::black(),
            line_width: 6.0,
        }
    }

    // ── builders ────────────────────────────────────────────────────────────

    /// Value bounds. `max` is forced above `min`.
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max.max(min + 1);
        self.set_value(self.value.max(min));
        self
    }

    pub fn length(mut self, length: f32) -> Self {
        self.length = length;
        self.set_value(self.value);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    // ── state ───────────────────────────────────────────────────────────────

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Clamps into range and positions the thumb to match exactly.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
        let t = (self.value - self.min) as f32 / (self.max - self.min) as f32;
        self.thumb_x = self.position.x - 4.0 + self.length * t;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn thumb_rect(&self) -> Rect {
        Rect::new(self.thumb_x, self.position.y - 5.0, 8.0, 16.0)
    }

    fn hit_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y - 9.0, self.length, 15.0)
    }

    fn value_from_thumb(&self) -> i32 {
        let t = (self.thumb_x - self.position.x + 4.0) / self.length;
        self.min + ((self.max - self.min) as f32 * t) as i32
    }
}

impl Widget for Slider {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        if !ctx.pressed() {
            self.dragging = false;
        }
        if !self.dragging && ctx.pressed() && !ctx.claim_taken() {
            let pointer = ctx.pointer();
            if self.hit_rect().contains(pointer) || self.thumb_rect().contains(pointer) {
                ctx.claim();
                self.dragging = true;
            }
        }
        if self.dragging {
            let lo = self.position.x - 4.0;
            let hi = self.position.x + self.length - 4.0;
            self.thumb_x = (ctx.pointer().x - 4.0).clamp(lo, hi);
            self.value = self.value_from_thumb();
        }
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let caption = format!("{}: {}", self.label, self.value);
        let line_height = painter.line_height(self.font, self.font_size);
        painter.text(
            &caption,
            self.font,
            self.font_size,
            self.color,
            Vec2::new(self.position.x, self.position.y - line_height - 12.0),
            None,
        );

        painter.fill_rect(
            Rect::new(self.position.x, self.position.y, self.length, self.line_width),
            self.color.with_alpha(150),
            0.0,
        );

        // Thumb bar with round caps.
        painter.fill_rect(self.thumb_rect(), self.color, 0.0);
        let cap_x = self.thumb_x + 4.0;
        painter.fill_circle(Vec2::new(cap_x, self.position.y - 5.0), 4.0, self.color);
        painter.fill_circle(Vec2::new(cap_x, self.position.y + 11.0), 4.0, self.color);
    }
}

// ── tests ───────────────────────────────────────────────────────────────────
