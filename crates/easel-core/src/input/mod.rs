//! Logical input types.
//!
//! Hosts translate their window system's events into these before handing
//! them to the widget layer; nothing here depends on a platform.

mod types;

pub use types::{Key, KeyEvent, Modifiers};
