//! Per-frame input snapshots and the pointer-claim protocol.
//!
//! Overlapping widgets all see the same pointer, so the frame carries a
//! single `claimed` flag: the first widget that takes the press gets it,
//! everyone after sees the pointer as spoken for. The flag stays set for
//! the whole press cycle and resets only on a frame where the primary
//! button is up, which is what keeps a drag glued to the widget that
//! started it even when the pointer crosses its neighbours.

use easel_core::coords::{Rect, Vec2};
use easel_core::input::KeyEvent;

/// Persistent input state owned by the host.
///
/// Call [`InputState::begin_frame`] exactly once per frame with the fresh
/// pointer snapshot, then hand the returned [`InputCtx`] to every widget's
/// `update` in z-order (topmost first).
#[derive(Debug, Default)]
pub struct InputState {
    claimed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some widget currently owns the press.
    #[inline]
    pub fn claimed(&self) -> bool {
        self.claimed
    }

    /// Starts a frame. `pressed` is the primary button; `key` is at most
    /// one keyboard event for this frame.
    pub fn begin_frame(
        &mut self,
        pointer: Vec2,
        pressed: bool,
        key: Option<KeyEvent>,
    ) -> InputCtx<'_> {
        if !pressed {
            self.claimed = false;
        }
        InputCtx {
            pointer,
            pressed,
            key,
            claimed: &mut self.claimed,
        }
    }
}

/// One frame's view of the input, borrowed from [`InputState`].
pub struct InputCtx<'a> {
    pointer: Vec2,
    pressed: bool,
    key: Option<KeyEvent>,
    claimed: &'a mut bool,
}

impl InputCtx<'_> {
    /// Pointer position in this context's coordinate space.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether the primary button is down this frame.
    #[inline]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// The frame's keyboard event, if any.
    #[inline]
    pub fn key(&self) -> Option<KeyEvent> {
        self.key
    }

    /// Whether the press already belongs to another widget.
    #[inline]
    pub fn claim_taken(&self) -> bool {
        *self.claimed
    }

    /// True when the pointer is over `rect` and no widget owns the press.
    /// Widgets use this for hover states so a drag passing over them does
    /// not light them up.
    #[inline]
    pub fn hover(&self, rect: Rect) -> bool {
        !*self.claimed && rect.contains(self.pointer)
    }

    /// Takes the press if the button is down inside `rect` and nobody
    /// claimed it yet. Returns whether the claim succeeded.
    pub fn try_claim(&mut self, rect: Rect) -> bool {
        if self.pressed && !*self.claimed && rect.contains(self.pointer) {
            *self.claimed = true;
            return true;
        }
        false
    }

    /// Marks the press as owned without a hit test. Used by widgets that
    /// decide eligibility themselves.
    #[inline]
    pub fn claim(&mut self) {
        *self.claimed = true;
    }

    /// A context whose pointer is expressed relative to `origin`, sharing
    /// this frame's claim flag. Containers use it to update children that
    /// live in a local coordinate space.
    pub fn translated(&mut self, origin: Vec2) -> InputCtx<'_> {
        InputCtx {
            pointer: self.pointer - origin,
            pressed: self.pressed,
            key: self.key,
            claimed: &mut *self.claimed,
        }
    }
}

// ── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn first_claim_wins_within_a_frame() {
        let mut state = InputState::new();
        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        assert!(ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
        assert!(!ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
        assert!(!ctx.hover(r(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn claim_persists_across_frames_while_held() {
        let mut state = InputState::new();
        {
            let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
            assert!(ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
        }
        // Still held on the next frame: the claim must survive begin_frame.
        {
            let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
            assert!(ctx.claim_taken());
            assert!(!ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
        }
        // Released: the claim clears and the next press can be taken again.
        {
            let ctx = state.begin_frame(Vec2::new(5.0, 5.0), false, None);
            assert!(!ctx.claim_taken());
        }
        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        assert!(ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn claim_requires_pressed_and_containment() {
        let mut state = InputState::new();
        let mut ctx = state.begin_frame(Vec2::new(50.0, 50.0), true, None);
        assert!(!ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
        assert!(!ctx.claim_taken());

        let mut state = InputState::new();
        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), false, None);
        assert!(!ctx.try_claim(r(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn translated_shares_the_claim() {
        let mut state = InputState::new();
        let mut ctx = state.begin_frame(Vec2::new(105.0, 205.0), true, None);
        {
            let mut local = ctx.translated(Vec2::new(100.0, 200.0));
            assert_eq!(local.pointer(), Vec2::new(5.0, 5.0));
            assert!(local.try_claim(r(0.0, 0.0, 10.0, 10.0)));
        }
        assert!(ctx.claim_taken());
    }

    #[test]
    fn hover_ignores_a_foreign_claim() {
        let mut state = InputState::new();
        let mut ctx = state.begin_frame(Vec2::new(5.0, 5.0), true, None);
        ctx.claim();
        assert!(!ctx.hover(r(0.0, 0.0, 10.0, 10.0)));
    }
}
