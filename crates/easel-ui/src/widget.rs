//! The widget contract and the type-erased [`Element`] wrapper.

use crate::input::InputCtx;
use crate::painter::Painter;

/// A retained UI component.
///
/// Hosts drive the tree with two passes per frame: `update` with the
/// frame's [`InputCtx`] (topmost widgets first, so they win the pointer
/// claim), then `draw` back-to-front.
pub trait Widget: 'static {
    /// Reacts to this frame's input. Static widgets keep the default no-op.
    fn update(&mut self, _ctx: &mut InputCtx<'_>) {}

    /// Draws the widget's current state.
    fn draw(&self, painter: &mut Painter<'_>);
}

/// A boxed [`Widget`], for storing mixed widget types in one collection.
///
/// ```rust,ignore
/// let mut panel: Vec<Element> = vec![
///     Label::new(Vec2::new(10.0, 20.0), "Volume", font).into(),
///     Slider::new(Vec2::new(10.0, 48.0), "volume", font).into(),
/// ];
/// for el in &mut panel {
///     el.update(&mut ctx);
/// }
/// ```
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new(widget: impl Widget) -> Self {
        Self(Box::new(widget))
    }

    #[inline]
    pub fn update(&mut self, ctx: &mut InputCtx<'_>) {
        self.0.update(ctx);
    }

    #[inline]
    pub fn draw(&self, painter: &mut Painter<'_>) {
        self.0.draw(painter);
    }
}

impl<W: Widget> From<W> for Element {
    fn from(widget: W) -> Self {
        Self::new(widget)
    }
}
