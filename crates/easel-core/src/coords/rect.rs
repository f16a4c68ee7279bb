use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Top-left corner.
    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner (exclusive).
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let a = self.origin;
        let b = self.origin + self.size;
        let min = a.min(b);
        Rect::from_origin_size(min, a.max(b) - min)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let min = r.min();
        let max = r.max();
        p.x >= min.x && p.y >= min.y && p.x < max.x && p.y < max.y
    }

    /// Same rectangle shifted by `delta`.
    #[inline]
    pub fn translated(self, delta: Vec2) -> Self {
        Rect::from_origin_size(self.origin + delta, self.size)
    }

    /// Grows every edge outward by `d` (shrinks for negative `d`).
    #[inline]
    pub fn expanded(self, d: f32) -> Self {
        Rect::from_origin_size(self.origin - Vec2::splat(d), self.size + Vec2::splat(d * 2.0))
    }

    /// Overlap of the two rectangles, `None` when they only touch or are
    /// disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();
        let min = a.min().max(b.min());
        let max = a.max().min(b.max());
        let overlap = Rect::from_origin_size(min, max - min);
        if overlap.is_empty() { None } else { Some(overlap) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn normalized_flips_negative_extents() {
        assert_eq!(r(3.0, 4.0, 8.0, 2.0).normalized(), r(3.0, 4.0, 8.0, 2.0));
        assert_eq!(r(10.0, 0.0, -4.0, 5.0).normalized(), r(6.0, 0.0, 4.0, 5.0));
        assert_eq!(r(0.0, 10.0, 5.0, -3.0).normalized(), r(0.0, 7.0, 5.0, 3.0));
        assert_eq!(r(6.0, 6.0, -6.0, -6.0).normalized(), r(0.0, 0.0, 6.0, 6.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = r(2.0, 2.0, 6.0, 6.0);
        assert!(rect.contains(Vec2::new(2.0, 2.0)));
        assert!(rect.contains(Vec2::new(7.9, 7.9)));
        // The max edge is excluded, everything past it too.
        assert!(!rect.contains(Vec2::new(8.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 8.0)));
        assert!(!rect.contains(Vec2::new(1.9, 5.0)));
    }

    #[test]
    fn contains_normalizes_first() {
        // Same region as (2, 2, 6, 6), stated backwards.
        assert!(r(8.0, 8.0, -6.0, -6.0).contains(Vec2::new(4.0, 4.0)));
    }

    #[test]
    fn translated_moves_origin_only() {
        let t = r(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(10.0, 20.0));
        assert_eq!(t, r(11.0, 22.0, 3.0, 4.0));
    }

    #[test]
    fn expanded_grows_and_shrinks() {
        assert_eq!(r(10.0, 10.0, 4.0, 6.0).expanded(2.0), r(8.0, 8.0, 8.0, 10.0));
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).expanded(-3.0), r(3.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn intersect_returns_the_overlap() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(r(5.0, 5.0, 10.0, 10.0)), Some(r(5.0, 5.0, 5.0, 5.0)));
        // A contained rect comes back unchanged.
        assert_eq!(a.intersect(r(2.0, 3.0, 4.0, 4.0)), Some(r(2.0, 3.0, 4.0, 4.0)));
    }

    #[test]
    fn intersect_rejects_touching_and_disjoint() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        // Shared edge: zero-width overlap does not count.
        assert_eq!(a.intersect(r(10.0, 0.0, 10.0, 10.0)), None);
        assert_eq!(a.intersect(r(30.0, 30.0, 5.0, 5.0)), None);
    }

    #[test]
    fn empty_when_either_extent_collapses() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn center_splits_the_extents() {
        assert_eq!(r(10.0, 20.0, 4.0, 8.0).center(), Vec2::new(12.0, 24.0));
    }
}
