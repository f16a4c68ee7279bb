use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::Canvas;

/// Software render target: straight-alpha RGBA bytes, row-major.
///
/// Implements [`Canvas`] with CPU rasterization and is also the source type
/// for blits, so retained content (thumbnails, scrolled panels) is a
/// `Pixmap` too.
///
/// # Example
/// ```rust,ignore
/// let mut surface = Pixmap::new(640, 480);
/// surface.fill(Color::white());
/// surface.fill_rect(Rect::new(10.0, 10.0, 80.0, 24.0), Color::rgb(0xef, 0xef, 0xef), 4.0);
/// ```
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Surface pre-filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixmap = Self::new(width, height);
        pixmap.fill(color);
        pixmap
    }

    /// Wraps an existing RGBA byte buffer.
    ///
    /// Returns `None` when `data` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full bounds as a rectangle at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn fill(&mut self, color: Color) {
        let px = [color.r, color.g, color.b, color.a];
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Color::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    // ── rasterization internals ───────────────────────────────────────────

    /// Source-over blend of `color` onto the pixel at `(x, y)`.
    ///
    /// Caller guarantees the coordinates are in bounds.
    #[inline]
    fn blend_px(&mut self, x: i64, y: i64, color: Color) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let dst = &mut self.data[i..i + 4];

        if color.a == 255 {
            dst.copy_from_slice(&[color.r, color.g, color.b, 255]);
            return;
        }
        if color.a == 0 {
            return;
        }

        let sa = color.a as u32;
        let inv = 255 - sa;
        dst[0] = ((color.r as u32 * sa + dst[0] as u32 * inv + 127) / 255) as u8;
        dst[1] = ((color.g as u32 * sa + dst[1] as u32 * inv + 127) / 255) as u8;
        dst[2] = ((color.b as u32 * sa + dst[2] as u32 * inv + 127) / 255) as u8;
        dst[3] = (sa + (dst[3] as u32 * inv + 127) / 255) as u8;
    }

    /// Integer pixel range whose centers fall inside `rect`, clipped to the
    /// surface. `None` when nothing is covered.
    fn span(&self, rect: Rect) -> Option<(i64, i64, i64, i64)> {
        let r = rect.normalized();
        let min = r.min();
        let max = r.max();

        let x0 = ((min.x - 0.5).ceil() as i64).max(0);
        let y0 = ((min.y - 0.5).ceil() as i64).max(0);
        let x1 = ((max.x - 0.5).ceil() as i64).min(self.width as i64);
        let y1 = ((max.y - 0.5).ceil() as i64).min(self.height as i64);

        if x0 >= x1 || y0 >= y1 { None } else { Some((x0, y0, x1, y1)) }
    }
}

/// True when `(px, py)` lies inside `rect` with its corners rounded by
/// `radius`. `rect` must be normalized and `radius` already clamped to the
/// half-extents.
fn rounded_contains(rect: Rect, radius: f32, px: f32, py: f32) -> bool {
    let min = rect.min();
    let max = rect.max();
    if px < min.x || py < min.y || px >= max.x || py >= max.y {
        return false;
    }

    // Outside the corner squares the plain rect test is enough.
    let cx = if px < min.x + radius {
        min.x + radius
    } else if px > max.x - radius {
        max.x - radius
    } else {
        return true;
    };
    let cy = if py < min.y + radius {
        min.y + radius
    } else if py > max.y - radius {
        max.y - radius
    } else {
        return true;
    };

    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= radius * radius
}

impl Canvas for Pixmap {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        if color.a == 0 {
            return;
        }
        let r = rect.normalized();
        let Some((x0, y0, x1, y1)) = self.span(r) else { return };

        let radius = radius.clamp(0.0, (r.size.x * 0.5).min(r.size.y * 0.5));
        if radius < 0.5 {
            for y in y0..y1 {
                for x in x0..x1 {
                    self.blend_px(x, y, color);
                }
            }
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if rounded_contains(r, radius, px, py) {
                    self.blend_px(x, y, color);
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32, radius: f32) {
        if color.a == 0 || width <= 0.0 {
            return;
        }
        let r = rect.normalized();
        let Some((x0, y0, x1, y1)) = self.span(r) else { return };

        let radius = radius.clamp(0.0, (r.size.x * 0.5).min(r.size.y * 0.5));
        let inner = r.expanded(-width);
        let inner_radius = (radius - width).max(0.0);
        // An outline wider than the half-extent degenerates to a full fill.
        let has_hole = !inner.is_empty();

        for y in y0..y1 {
            for x in x0..x1 {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if !rounded_contains(r, radius, px, py) {
                    continue;
                }
                if has_hole && rounded_contains(inner, inner_radius, px, py) {
                    continue;
                }
                self.blend_px(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if color.a == 0 || radius <= 0.0 {
            return;
        }
        let bbox = Rect::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        );
        let Some((x0, y0, x1, y1)) = self.span(bbox) else { return };

        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend_px(x, y, color);
                }
            }
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        if color.a == 0 || width <= 0.0 {
            return;
        }

        // Axis-aligned fast paths (carets, separators): integer-coordinate
        // semantics, both endpoints included.
        if from.x == to.x {
            let y0 = from.y.min(to.y);
            let y1 = from.y.max(to.y);
            self.fill_rect(Rect::new(from.x, y0, width, y1 - y0 + 1.0), color, 0.0);
            return;
        }
        if from.y == to.y {
            let x0 = from.x.min(to.x);
            let x1 = from.x.max(to.x);
            self.fill_rect(Rect::new(x0, from.y, x1 - x0 + 1.0, width), color, 0.0);
            return;
        }

        // General segment: pixel centers within half the width.
        let d = to - from;
        let len2 = d.x * d.x + d.y * d.y;
        let half = (width * 0.5).max(0.5);
        let bbox = Rect::new(
            from.x.min(to.x) - half,
            from.y.min(to.y) - half,
            (to.x - from.x).abs() + half * 2.0,
            (to.y - from.y).abs() + half * 2.0,
        );
        let Some((x0, y0, x1, y1)) = self.span(bbox) else { return };

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = (((p.x - from.x) * d.x + (p.y - from.y) * d.y) / len2).clamp(0.0, 1.0);
                let nearest = from + d * t;
                let off = p - nearest;
                if off.x * off.x + off.y * off.y <= half * half {
                    self.blend_px(x, y, color);
                }
            }
        }
    }

    fn blit(&mut self, src: &Pixmap, at: Vec2) {
        self.blit_window(src, src.bounds(), at);
    }

    fn blit_window(&mut self, src: &Pixmap, window: Rect, at: Vec2) {
        let w = window.normalized();
        let sx0 = (w.origin.x.round() as i64).clamp(0, src.width as i64);
        let sy0 = (w.origin.y.round() as i64).clamp(0, src.height as i64);
        let sx1 = ((w.origin.x + w.size.x).round() as i64).clamp(sx0, src.width as i64);
        let sy1 = ((w.origin.y + w.size.y).round() as i64).clamp(sy0, src.height as i64);

        let dx0 = at.x.round() as i64;
        let dy0 = at.y.round() as i64;

        for sy in sy0..sy1 {
            let dy = dy0 + (sy - sy0);
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for sx in sx0..sx1 {
                let dx = dx0 + (sx - sx0);
                if dx < 0 || dx >= self.width as i64 {
                    continue;
                }
                let i = (sy as usize * src.width as usize + sx as usize) * 4;
                let c = Color::rgba(src.data[i], src.data[i + 1], src.data[i + 2], src.data[i + 3]);
                self.blend_px(dx, dy, c);
            }
        }
    }
}
