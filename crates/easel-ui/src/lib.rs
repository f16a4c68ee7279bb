//! Retained widgets over `easel-core`'s software surface.
//!
//! The toolkit is frame-driven: once per frame the host snapshots its
//! pointer/keyboard state into [`input::InputState::begin_frame`], passes the
//! returned context through every widget's `update`, then draws the tree
//! into a [`painter::Painter`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel_ui::prelude::*;
//!
//! let (fonts, font) = FontStore::with_builtin();
//! let mut surface = Pixmap::filled(640, 480, Color::white());
//! let mut input = InputState::new();
//!
//! let mut button = Button::new(Rect::new(20.0, 20.0, 120.0, 28.0), font)
//!     .text("Save")
//!     .on_press(|| println!("saved!"));
//!
//! // In your frame callback:
//! let mut ctx = input.begin_frame(mouse_pos, mouse_down, key_event);
//! button.update(&mut ctx);
//! button.draw(&mut Painter::new(&mut surface, &fonts));
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`widget::Widget`] for any type, then use it anywhere an
//! [`widget::Element`] is accepted:
//!
//! ```rust,ignore
//! use easel_ui::prelude::*;
//!
//! pub struct Badge { rect: Rect, color: Color }
//!
//! impl Widget for Badge {
//!     fn draw(&self, painter: &mut Painter<'_>) {
//!         painter.fill_rect(self.rect, self.color, self.rect.size.y / 2.0);
//!     }
//! }
//! ```

pub mod dialog;
pub mod error;
pub mod fs;
pub mod input;
pub mod painter;
pub mod style;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend UI in one import.
pub mod prelude {
    pub use crate::dialog::{DialogMode, DialogOutcome, FileDialog};
    pub use crate::error::DialogError;
    pub use crate::fs::{FileSource, StdFs};
    pub use crate::input::{InputCtx, InputState};
    pub use crate::painter::Painter;
    pub use crate::style::{ButtonStyle, FaceStyle, ScrollBarStyle, ToggleStyle};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        label::Label,
        scrollbar::ScrollBar,
        slider::Slider,
        text_input::TextInput,
        toggle::{ToggleButton, ToggleGroup},
    };

    // Re-export the core primitives everyone needs.
    pub use easel_core::coords::{Rect, Vec2};
    pub use easel_core::input::{Key, KeyEvent, Modifiers};
    pub use easel_core::paint::Color;
    pub use easel_core::surface::{Canvas, Pixmap};
    pub use easel_core::text::{FontId, FontStore};
}
