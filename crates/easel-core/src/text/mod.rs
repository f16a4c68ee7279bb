//! Text measurement and rasterization.
//!
//! Widgets address faces through [`FontStore`] handles; the store owns
//! [`Typeface`] implementations. The crate bundles one face, the 8×8
//! [`BitmapFont`], so the toolkit works without any font assets.

mod bitmap;
mod font;

pub use bitmap::BitmapFont;
pub use font::{FontId, FontStore, Typeface};
