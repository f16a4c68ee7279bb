//! Vertical scrollbar with a proportional thumb.

use easel_core::coords::{Rect, Vec2};

use crate::input::InputCtx;
use crate::painter::Painter;
use crate::style::ScrollBarStyle;
use crate::widget::Widget;

/// Scroll position for a taller-than-viewport surface.
///
/// The thumb's height is the track height scaled by how much of the
/// content the viewport shows. Dragging keeps the grab offset, so the
/// thumb never jumps under the pointer. [`ScrollBar::clip`] is the
/// content-space window the host should blit.
pub struct ScrollBar {
    rect: Rect,
    content_size: Vec2,
    visible_height: f32,
    thumb_top: f32,
    drag: Option<f32>,
    hovered: bool,
    style: ScrollBarStyle,
}

impl ScrollBar {
    /// `rect` is the track in parent coordinates; `content_size` the full
    /// scrolled surface; `visible_height` how much of it the viewport shows.
    pub fn new(rect: Rect, content_size: Vec2, visible_height: f32) -> Self {
        Self {
            rect,
            content_size,
            visible_height,
            thumb_top: 0.0,
            drag: None,
            hovered: false,
            style: ScrollBarStyle::default(),
        }
    }

    pub fn style(mut self, style: ScrollBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Swaps in a new content height, keeping the scroll position clamped.
    pub fn set_content_size(&mut self, content_size: Vec2) {
        self.content_size = content_size;
        self.thumb_top = self.thumb_top.clamp(0.0, self.max_thumb_top());
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The window of the content the viewport currently shows.
    pub fn clip(&self) -> Rect {
        let y = if self.rect.size.y > 0.0 {
            self.thumb_top * self.content_size.y / self.rect.size.y
        } else {
            0.0
        };
        Rect::new(0.0, y, self.content_size.x, self.visible_height)
    }

    fn thumb_height(&self) -> f32 {
        if self.content_size.y <= 0.0 {
            return self.rect.size.y;
        }
        (self.rect.size.y * self.visible_height / self.content_size.y).min(self.rect.size.y)
    }

    fn max_thumb_top(&self) -> f32 {
        (self.rect.size.y - self.thumb_height()).max(0.0)
    }

    fn thumb_rect(&self) -> Rect {
        Rect::new(
            self.rect.origin.x + 1.0,
            self.rect.origin.y + self.thumb_top,
            self.rect.size.x - 2.0,
            self.thumb_height(),
        )
    }
}

impl Widget for ScrollBar {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        if !ctx.pressed() {
            self.drag = None;
        }
        let thumb = self.thumb_rect();
        self.hovered = ctx.hover(thumb);
        if self.drag.is_none() && ctx.try_claim(thumb) {
            self.drag = Some(thumb.origin.y - ctx.pointer().y);
        }
        if let Some(anchor) = self.drag {
            let top = ctx.pointer().y + anchor - self.rect.origin.y;
            self.thumb_top = top.clamp(0.0, self.max_thumb_top());
        }
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        painter.fill_rect(self.rect, self.style.track, 0.0);
        let color = if self.drag.is_some() {
            self.style.thumb_drag
        } else if self.hovered {
            self.style.thumb_hover
        } else {
            self.style.thumb
        };
        painter.fill_rect(self.thumb_rect(), color, 0.0);
    }
}

// ── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;

    fn bar() -> ScrollBar {
        // 100px track over 400px of content seen through a 100px viewport:
        // the thumb is 25px tall and scrolls content 4px per thumb px.
        ScrollBar::new(
            Rect::new(0.0, 0.0, 20.0, 100.0),
            Vec2::new(480.0, 400.0),
            100.0,
        )
    }

    #[test]
    fn clip_starts_at_the_top() {
        let bar = bar();
        let clip = bar.clip();
        assert_eq!(clip.origin.y, 0.0);
        assert_eq!(clip.size, Vec2::new(480.0, 100.0));
    }

    #[test]
    fn drag_scrolls_proportionally() {
        let mut bar = bar();
        let mut state = InputState::new();

        bar.update(&mut state.begin_frame(Vec2::new(10.0, 10.0), true, None));
        assert!(bar.is_dragging());

        bar.update(&mut state.begin_frame(Vec2::new(10.0, 40.0), true, None));
        assert_eq!(bar.clip().origin.y, 120.0);

        bar.update(&mut state.begin_frame(Vec2::new(10.0, 40.0), false, None));
        assert!(!bar.is_dragging());
    }

    #[test]
    fn drag_clamps_to_both_ends() {
        let mut bar = bar();
        let mut state = InputState::new();

        bar.update(&mut state.begin_frame(Vec2::new(10.0, 5.0), true, None));
        bar.update(&mut state.begin_frame(Vec2::new(10.0, 1000.0), true, None));
        // Bottom: clip reaches exactly content minus viewport.
        assert_eq!(bar.clip().origin.y, 300.0);

        bar.update(&mut state.begin_frame(Vec2::new(10.0, -1000.0), true, None));
        assert_eq!(bar.clip().origin.y, 0.0);
    }

    #[test]
    fn track_press_outside_the_thumb_does_nothing() {
        let mut bar = bar();
        let mut state = InputState::new();

        let mut ctx = state.begin_frame(Vec2::new(10.0, 90.0), true, None);
        bar.update(&mut ctx);
        assert!(!bar.is_dragging());
        assert!(!ctx.claim_taken());
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut bar = ScrollBar::new(
            Rect::new(0.0, 0.0, 20.0, 100.0),
            Vec2::new(480.0, 50.0),
            100.0,
        );
        let mut state = InputState::new();

        bar.update(&mut state.begin_frame(Vec2::new(10.0, 50.0), true, None));
        bar.update(&mut state.begin_frame(Vec2::new(10.0, 90.0), true, None));
        assert_eq!(bar.clip().origin.y, 0.0);
    }

    #[test]
    fn claimed_pointer_cannot_grab_the_thumb() {
        let mut bar = bar();
        let mut state = InputState::new();

        let mut ctx = state.begin_frame(Vec2::new(10.0, 10.0), true, None);
        ctx.claim();
        bar.update(&mut ctx);
        assert!(!bar.is_dragging());
    }

    #[test]
    fn content_swap_keeps_the_position_valid() {
        let mut bar = bar();
        let mut state = InputState::new();

        bar.update(&mut state.begin_frame(Vec2::new(10.0, 10.0), true, None));
        bar.update(&mut state.begin_frame(Vec2::new(10.0, 1000.0), true, None));
        assert_eq!(bar.clip().origin.y, 300.0);

        // Content shrinks to fit the viewport: scroll collapses to zero.
        bar.set_content_size(Vec2::new(480.0, 100.0));
        assert_eq!(bar.clip().origin.y, 0.0);
    }
}
