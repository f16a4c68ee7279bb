//! Widget color schemes.
//!
//! Every style type is plain data with a [`Default`] matching the stock
//! look, so callers restyle with struct update syntax:
//!
//! ```rust,ignore
//! let style = ButtonStyle {
//!     corner_radius: 0.0,
//!     ..ButtonStyle::default()
//! };
//! ```

use easel_core::paint::Color;

/// One visual state of a widget: fill, content and outline colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceStyle {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

impl FaceStyle {
    pub const fn new(background: Color, foreground: Color, border: Color) -> Self {
        Self {
            background,
            foreground,
            border,
        }
    }
}

/// Colors for the four [`Button`](crate::widgets::button::Button) states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub idle: FaceStyle,
    pub hover: FaceStyle,
    pub pressed: FaceStyle,
    pub disabled: FaceStyle,
    pub border_width: f32,
    pub corner_radius: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        let black = Color::black();
        Self {
            idle: FaceStyle::new(Color::rgb(0xef, 0xef, 0xef), black, black),
            hover: FaceStyle::new(Color::rgb(0xe5, 0xe5, 0xe5), black, black),
            pressed: FaceStyle::new(Color::rgb(0xf5, 0xf5, 0xf5), black, black),
            disabled: FaceStyle::new(
                Color::rgb(0xf7, 0xf7, 0xf7),
                Color::rgb(0x38, 0x38, 0x38),
                Color::rgb(0x38, 0x38, 0x38),
            ),
            border_width: 1.0,
            corner_radius: 4.0,
        }
    }
}

/// Colors for the five [`ToggleButton`](crate::widgets::toggle::ToggleButton)
/// states. `active` is the selected look when the pointer is elsewhere,
/// `active_hover` when it is over the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleStyle {
    pub idle: FaceStyle,
    pub hover: FaceStyle,
    pub active: FaceStyle,
    pub active_hover: FaceStyle,
    pub disabled: FaceStyle,
    pub border_width: f32,
    pub corner_radius: f32,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        let near_black = Color::rgb(0x0a, 0x0a, 0x0a);
        let off_white = Color::rgb(0xef, 0xef, 0xef);
        Self {
            idle: FaceStyle::new(off_white, near_black, near_black),
            hover: FaceStyle::new(Color::rgb(0xe5, 0xe5, 0xe5), Color::black(), Color::black()),
            active: FaceStyle::new(near_black, off_white, off_white),
            active_hover: FaceStyle::new(
                Color::black(),
                Color::rgb(0xe5, 0xe5, 0xe5),
                Color::rgb(0xe5, 0xe5, 0xe5),
            ),
            disabled: FaceStyle::new(
                Color::rgb(0xf7, 0xf7, 0xf7),
                Color::rgb(0x38, 0x38, 0x38),
                Color::rgb(0x38, 0x38, 0x38),
            ),
            border_width: 1.0,
            corner_radius: 4.0,
        }
    }
}

/// Colors for [`ScrollBar`](crate::widgets::scrollbar::ScrollBar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBarStyle {
    pub track: Color,
    pub thumb: Color,
    pub thumb_hover: Color,
    pub thumb_drag: Color,
}

impl Default for ScrollBarStyle {
    fn default() -> Self {
        Self {
            track: Color::rgb(0xf1, 0xf1, 0xf1),
            thumb: Color::rgb(0xc1, 0xc1, 0xc1),
            thumb_hover: Color::rgb(0xa8, 0xa8, 0xa8),
            thumb_drag: Color::rgb(0x78, 0x78, 0x78),
        }
    }
}
