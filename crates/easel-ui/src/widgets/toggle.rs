//! Latching buttons and the single-select group that owns them.

use easel_core::coords::{Rect, Vec2};
use easel_core::surface::Pixmap;
use easel_core::text::FontId;

use crate::input::InputCtx;
use crate::painter::Painter;
use crate::style::{FaceStyle, ToggleStyle};
use crate::widget::Widget;
use crate::widgets::press::PressTracker;

/// Which face a toggle shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleVisual {
    Idle,
    Hover,
    Active,
    ActiveHover,
    Disabled,
}

/// A button that latches on when pressed and stays on until something
/// turns it off. Pressing it while already active is a no-op; the press
/// is not claimed, so deselection is owned by whoever manages the group.
///
/// While active, `on_active` runs once per `update`.
pub struct ToggleButton {
    rect: Rect,
    text: String,
    font: FontId,
    font_size: f32,
    icon: Option<Pixmap>,
    style: ToggleStyle,
    enabled: bool,
    active: bool,
    visual: ToggleVisual,
    press: PressTracker,
    on_active: Option<Box<dyn FnMut()>>,
}

impl ToggleButton {
    pub fn new(rect: Rect, font: FontId) -> Self {
        Self {
            rect,
            text: String::new(),
            font,
            font_size: 15.0,
            icon: None,
            style: ToggleStyle::default(),
            enabled: true,
            active: false,
            visual: ToggleVisual::Idle,
            press: PressTracker::new(),
            on_active: None,
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

    pub fn icon(mut self, icon: Pixmap) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn style(mut self, style: ToggleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn on_active(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_active = Some(Box::new(f));
        self
    }

    // ── state ───────────────────────────────────────────────────────────────

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active && self.enabled;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn visual(&self) -> ToggleVisual {
        self.visual
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Per-frame pass. Returns whether this frame's press newly latched
    /// the toggle on.
    fn refresh(&mut self, ctx: &mut InputCtx<'_>) -> bool {
        if !self.enabled {
            self.active = false;
            self.visual = ToggleVisual::Disabled;
            self.press.press_started(ctx, self.rect, false);
            return false;
        }

        // Runs off the previous frame's latch, so the first callback lands
        // the frame after activation.
        if self.active {
            if let Some(f) = self.on_active.as_mut() {
                f();
            }
        }

        let fired = self.press.press_started(ctx, self.rect, !self.active);
        if fired {
            self.active = true;
        }

        self.visual = match (self.active, ctx.hover(self.rect)) {
            (true, true) => ToggleVisual::ActiveHover,
            (true, false) => ToggleVisual::Active,
            (false, true) => ToggleVisual::Hover,
            (false, false) => ToggleVisual::Idle,
        };
        fired
    }

    fn face(&self) -> &FaceStyle {
        match self.visual {
            ToggleVisual::Idle => &self.style.idle,
            ToggleVisual::Hover => &self.style.hover,
            ToggleVisual::Active => &self.style.active,
            ToggleVisual::ActiveHover => &self.style.active_hover,
            ToggleVisual::Disabled => &self.style.disabled,
        }
    }
}

impl Widget for ToggleButton {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        self.refresh(ctx);
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

/// Mutually exclusive set of [`ToggleButton`]s.
///
/// At most one member is active. A press on an inactive member selects
/// it and deselects the rest; a press on the active member changes
/// nothing. Selection only moves or clears through [`ToggleGroup::update`]
/// and [`ToggleGroup::set_selected`].
#[derive(Default)]
pub struct ToggleGroup {
    buttons: Vec<ToggleButton>,
}

impl ToggleGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, button: ToggleButton) {
        self.buttons.push(button);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ToggleButton> {
        self.buttons.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ToggleButton> {
        self.buttons.get_mut(index)
    }

    /// Index of the active member, if any.
    pub fn selected(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.is_active())
    }

    /// Forces the selection. `None` (or an out-of-range index) clears it.
    pub fn set_selected(&mut self, index: Option<usize>) {
        for (i, b) in self.buttons.iter_mut().enumerate() {
            b.set_active(index == Some(i));
        }
    }
}

impl Widget for ToggleGroup {
    fn update(&mut self, ctx: &mut InputCtx<'_>) {
        let mut newly = None;
        for (i, b) in self.buttons.iter_mut().enumerate() {
            if b.refresh(ctx) {
                newly = Some(i);
            }
        }
        if let Some(winner) = newly {
            for (i, b) in self.buttons.iter_mut().enumerate() {
                if i != winner {
                    b.set_active(false);
                }
            }
        }
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        for b in &self.buttons {
            b.draw(painter);
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

    fn font() -> FontId {
        easel_core::text::FontStore::with_builtin().1
    }

    fn two_toggles() -> ToggleGroup {
        let mut group = ToggleGroup::new();
        group.push(ToggleButton::new(Rect::new(0.0, 0.0, 20.0, 20.0), font()));
        group.push(ToggleButton::new(Rect::new(30.0, 0.0, 20.0, 20.0), font()));
        group
    }

    fn press(group: &mut ToggleGroup, state: &mut InputState, at: Vec2) {
        group.update(&mut state.begin_frame(at, true, None));
        group.update(&mut state.begin_frame(at, false, None));
    }

    #[test]
    fn selection_is_exclusive() {
        let mut group = two_toggles();
        let mut state = InputState::new();

        press(&mut group, &mut state, Vec2::new(5.0, 5.0));
        assert_eq!(group.selected(), Some(0));

        press(&mut group, &mut state, Vec2::new(35.0, 5.0));
        assert_eq!(group.selected(), Some(1));
        assert!(!group.get(0).map(|b| b.is_active()).unwrap_or(true));
    }

    #[test]
    fn pressing_the_active_member_keeps_it_selected() {
        let mut group = two_toggles();
        let mut state = InputState::new();

        press(&mut group, &mut state, Vec2::new(5.0, 5.0));
        assert_eq!(group.selected(), Some(0));

        // The repeat press neither deselects nor claims the pointer.
        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        group.update(&mut ctx);
        assert_eq!(group.selected(), Some(0));
        assert!(!ctx.claim_taken());
    }

    #[test]
    fn activation_claims_the_press() {
        let mut group = two_toggles();
        let mut state = InputState::new();

        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        group.update(&mut ctx);
        assert!(ctx.claim_taken());
        assert_eq!(group.selected(), Some(0));
    }

    #[test]
    fn on_active_runs_every_frame_while_latched() {
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        let mut toggle = ToggleButton::new(Rect::new(0.0, 0.0, 20.0, 20.0), font())
            .on_active(move || counter.set(counter.get() + 1));
        let mut state = InputState::new();

        let at = Vec2::new(5.0, 5.0);
        toggle.update(&mut state.begin_frame(at, true, None));
        // The callback sees the latch starting the frame after activation.
        assert_eq!(ticks.get(), 0);
        toggle.update(&mut state.begin_frame(at, false, None));
        toggle.update(&mut state.begin_frame(Vec2::new(90.0, 90.0), false, None));
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn disabling_clears_the_latch() {
        let mut group = two_toggles();
        let mut state = InputState::new();

        press(&mut group, &mut state, Vec2::new(5.0, 5.0));
        assert_eq!(group.selected(), Some(0));

        if let Some(b) = group.get_mut(0) {
            b.set_enabled(false);
        }
        group.update(&mut state.begin_frame(Vec2::new(90.0, 90.0), false, None));
        assert_eq!(group.selected(), None);
        assert_eq!(group.get(0).map(|b| b.visual()), Some(ToggleVisual::Disabled));
    }

    #[test]
    fn set_selected_moves_and_clears() {
        let mut group = two_toggles();
        group.set_selected(Some(1));
        assert_eq!(group.selected(), Some(1));
        group.set_selected(None);
        assert_eq!(group.selected(), None);
        group.set_selected(Some(7));
        assert_eq!(group.selected(), None);
    }
}
