use super::Vec2;

/// Axis-aligned rectangle given by two opposite corners.
///
/// Corners may be stored in any order; queries normalize them first.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x0: Vec2,
    pub x1: Vec2,
}

impl Rect {
    /// The full normalized drawing space, `(-1, -1)..(1, 1)`.
    pub const UNIT: Rect = Rect::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));

    #[inline]
    pub const fn new(x0: Vec2, x1: Vec2) -> Self {
        Self { x0, x1 }
    }

    #[inline]
    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x0.x.min(self.x1.x), self.x0.y.min(self.x1.y))
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x0.x.max(self.x1.x), self.x0.y.max(self.x1.y))
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max() - self.min()
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.x0 + self.x1) * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        let s = self.size();
        s.x <= 0.0 || s.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x0.is_finite() && self.x1.is_finite()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let lo = self.min();
        let hi = self.max();
        p.x >= lo.x && p.y >= lo.y && p.x < hi.x && p.y < hi.y
    }

    /// Both corners moved by `delta`.
    #[inline]
    #[must_use]
    pub fn translated(self, delta: Vec2) -> Rect {
        Rect::new(self.x0 + delta, self.x1 + delta)
    }
}
