//! Press-cycle edge detection shared by the clickable widgets.

use easel_core::coords::Rect;

use crate::input::InputCtx;

/// Turns the level-triggered pointer state into a once-per-press edge.
///
/// Embed one per clickable region and call [`PressTracker::press_started`]
/// every frame, whether or not the widget wants the press; the tracker
/// needs to see the release to re-arm. A press counts even when it began
/// outside the region and slid in, as long as no other widget claimed it
/// first.
#[derive(Debug, Default)]
pub struct PressTracker {
    fired: bool,
}

impl PressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per press cycle: on the first frame the held
    /// primary button sits inside `rect` with the claim free and the
    /// widget `armed`. Claims the press when it returns true.
    pub fn press_started(&mut self, ctx: &mut InputCtx<'_>, rect: Rect, armed: bool) -> bool {
        if !ctx.pressed() {
            self.fired = false;
            return false;
        }
        if self.fired || !armed {
            return false;
        }
        if ctx.try_claim(rect) {
            self.fired = true;
            return true;
        }
        false
    }

    /// True from the frame the press fired until the button is released.
    #[inline]
    pub fn held(&self) -> bool {
        self.fired
    }
}

// ── tests ───────────────────────────────────────────────────────────────────
