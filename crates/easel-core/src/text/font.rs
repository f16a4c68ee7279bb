use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Pixmap;

/// A text face the store can measure and rasterize with.
///
/// Implementations lay text out on a single line; the widget set has no
/// multi-line text. `measure` and `raster` must agree: the rasterized pixmap
/// is exactly the measured size.
pub trait Typeface: 'static {
    /// Size of `text` laid out on one line at `size`.
    fn measure(&self, text: &str, size: f32) -> Vec2;

    /// Vertical extent of any line at `size`.
    fn line_height(&self, size: f32) -> f32;

    /// Rasterizes `text` onto a transparent background.
    fn raster(&self, text: &str, size: f32, color: Color) -> Pixmap;
}

/// Opaque handle to a face registered in a [`FontStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the registered text faces.
///
/// Faces are immutable after registration. The store is owned by the host
/// and lent to the widget layer each frame for measurement and drawing.
pub struct FontStore {
    faces: Vec<Box<dyn Typeface>>,
}

impl FontStore {
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Store pre-loaded with the built-in 8×8 bitmap face.
    pub fn with_builtin() -> (Self, FontId) {
        let mut store = Self::new();
        let id = store.register(super::BitmapFont::new());
        (store, id)
    }

    /// Registers a face and returns the handle that identifies it in draw
    /// calls.
    pub fn register(&mut self, face: impl Typeface) -> FontId {
        let id = FontId(self.faces.len());
        self.faces.push(Box::new(face));
        log::debug!("registered typeface #{}", id.0);
        id
    }

    fn get(&self, id: FontId) -> Option<&dyn Typeface> {
        self.faces.get(id.0).map(|f| f.as_ref())
    }

    /// Measures `text`, returning `(width, height)` in pixels.
    ///
    /// An unregistered `id` measures as zero-width, `size` tall.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        match self.get(id) {
            Some(face) => face.measure(text, size),
            None => Vec2::new(0.0, size),
        }
    }

    /// Line height of the face at `size` (falls back to `size` itself).
    pub fn line_height(&self, id: FontId, size: f32) -> f32 {
        match self.get(id) {
            Some(face) => face.line_height(size),
            None => size,
        }
    }

    /// Rasterizes `text`, or `None` for an unregistered `id`.
    pub fn raster(&self, text: &str, id: FontId, size: f32, color: Color) -> Option<Pixmap> {
        self.get(id).map(|face| face.raster(text, size, color))
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}
