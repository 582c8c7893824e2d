use super::{Rect, Vec2};

/// Affine mapping between a parent's normalized `[-1, 1]²` space and the
/// local space of a child occupying a sub-rectangle of it.
///
/// A child always sees its own space as `[-1, 1]²`; the rectangle it was
/// built from is where that space lands in the parent. Axes can only be
/// constructed from non-degenerate rectangles, so the mapping is always
/// invertible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axes {
    center: Vec2,
    half: Vec2,
}

impl Axes {
    /// Maps every space onto itself.
    pub const IDENTITY: Axes = Axes { center: Vec2::new(0.0, 0.0), half: Vec2::new(1.0, 1.0) };

    /// Axes spanning `rect`, or `None` when it has zero area or non-finite corners.
    pub fn from_rect(rect: Rect) -> Option<Axes> {
        if !rect.is_finite() || rect.is_empty() {
            return None;
        }
        Some(Axes { center: rect.center(), half: rect.size() * 0.5 })
    }

    /// Parent-space point expressed in the child's local space.
    #[inline]
    pub fn to_local(&self, parent: Vec2) -> Vec2 {
        let d = parent - self.center;
        Vec2::new(d.x / self.half.x, d.y / self.half.y)
    }

    /// Child-local point expressed in the parent's space.
    #[inline]
    pub fn to_parent(&self, local: Vec2) -> Vec2 {
        self.center + local.mul_elem(self.half)
    }

    /// Scale factors from local to parent units along each axis.
    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.half
    }

    /// The rectangle in parent space covered by the local `[-1, 1]²`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extent(self.center, self.half)
    }

    /// Composes two mappings: `inner` maps into this axes' local space, the
    /// result maps directly into this axes' parent.
    #[must_use]
    pub fn then(&self, inner: &Axes) -> Axes {
        Axes {
            center: self.to_parent(inner.center),
            half: self.half.mul_elem(inner.half),
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::IDENTITY
    }
}
