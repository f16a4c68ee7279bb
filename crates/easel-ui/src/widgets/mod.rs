//! The built-in widget set.

pub mod button;
pub mod label;
pub mod press;
pub mod scrollbar;
pub mod slider;
pub mod text_edit;
pub mod text_input;
pub mod toggle;
