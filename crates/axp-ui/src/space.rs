use std::fmt::Debug;

use crate::error::LayoutError;

// ── Extent ────────────────────────────────────────────────────────────────

/// Scalar usable as a [`LinearRange`] bound.
pub trait Extent: Copy + PartialOrd + Debug {
    const ZERO: Self;
    /// Lower bound of an unbounded range.
    const LOWEST: Self;
    /// Upper bound of an unbounded range.
    const HIGHEST: Self;

    /// `self × factor`, saturating at the representable extremes.
    fn scaled(self, factor: usize) -> Self;
}

impl Extent for usize {
    const ZERO: Self = 0;
    const LOWEST: Self = usize::MIN;
    const HIGHEST: Self = usize::MAX;

    #[inline]
    fn scaled(self, factor: usize) -> Self {
        self.saturating_mul(factor)
    }
}

impl Extent for u32 {
    const ZERO: Self = 0;
    const LOWEST: Self = u32::MIN;
    const HIGHEST: Self = u32::MAX;

    #[inline]
    fn scaled(self, factor: usize) -> Self {
        u32::try_from(factor).map_or(u32::MAX, |f| self.saturating_mul(f))
    }
}

impl Extent for f32 {
    const ZERO: Self = 0.0;
    const LOWEST: Self = f32::NEG_INFINITY;
    const HIGHEST: Self = f32::INFINITY;

    #[inline]
    fn scaled(self, factor: usize) -> Self {
        // inf × 0 would be NaN
        if factor == 0 { 0.0 } else { self * factor as f32 }
    }
}

#[inline]
fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[inline]
fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

// ── LinearRange ───────────────────────────────────────────────────────────

/// Closed interval `[min, max]`.
///
/// A range with `min > max` is *empty*: it is what [`intersect`](Self::intersect)
/// produces for disjoint inputs, and it contains no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Extent> LinearRange<T> {
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Accepts exactly `value`.
    #[inline]
    pub fn exact(value: T) -> Self {
        Self { min: value, max: value }
    }

    /// Accepts anything from `min` upwards.
    #[inline]
    pub fn at_least(min: T) -> Self {
        Self { min, max: T::HIGHEST }
    }

    /// Accepts every value; the identity of [`intersect`](Self::intersect).
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: T::LOWEST, max: T::HIGHEST }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Narrows to the overlap of both ranges (max of mins, min of maxes).
    #[inline]
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        Self {
            min: max_of(self.min, other.min),
            max: min_of(self.max, other.max),
        }
    }

    /// Both bounds multiplied by `factor`.
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: usize) -> Self {
        Self { min: self.min.scaled(factor), max: self.max.scaled(factor) }
    }

    /// Nearest accepted value, or `None` for an empty range.
    #[inline]
    pub fn clamp(&self, value: T) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(min_of(max_of(value, self.min), self.max))
        }
    }
}

impl<T: Extent> Default for LinearRange<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Range of one screen dimension, in device pixels.
pub type ScreenDimensionRange = LinearRange<usize>;

// ── ScreenSpaceSize ───────────────────────────────────────────────────────

/// Concrete size in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenSpaceSize {
    pub width: usize,
    pub height: usize,
}

impl ScreenSpaceSize {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Grows each dimension to at least `other`'s.
    #[inline]
    pub fn expand(&mut self, other: ScreenSpaceSize) {
        self.width = self.width.max(other.width);
        self.height = self.height.max(other.height);
    }
}

// ── ScreenSpaceRange ──────────────────────────────────────────────────────

/// Accepted widths and heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSpaceRange {
    pub width: ScreenDimensionRange,
    pub height: ScreenDimensionRange,
}

impl ScreenSpaceRange {
    #[inline]
    pub fn unbounded() -> Self {
        Self { width: LinearRange::unbounded(), height: LinearRange::unbounded() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width.is_empty() || self.height.is_empty()
    }

    #[inline]
    pub fn contains(&self, size: ScreenSpaceSize) -> bool {
        self.width.contains(size.width) && self.height.contains(size.height)
    }

    #[inline]
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        Self {
            width: self.width.intersect(other.width),
            height: self.height.intersect(other.height),
        }
    }
}

impl Default for ScreenSpaceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

// ── SpaceRange ────────────────────────────────────────────────────────────

/// A widget's answer to "how much room do you need?": the sizes it tolerates
/// plus the size it would pick if free to choose.
///
/// Containers combine children with [`intersect`](Self::intersect): ranges
/// narrow to their overlap while the preferred size grows to the neediest
/// child's. [`SpaceRange::any`] is the identity of that combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceRange {
    pub range: ScreenSpaceRange,
    pub preferred: ScreenSpaceSize,
}

impl SpaceRange {
    /// Tolerates every size, prefers nothing.
    #[inline]
    pub fn any() -> Self {
        Self { range: ScreenSpaceRange::unbounded(), preferred: ScreenSpaceSize::ZERO }
    }

    /// Tolerates exactly `size`.
    #[inline]
    pub fn exact(size: ScreenSpaceSize) -> Self {
        Self {
            range: ScreenSpaceRange {
                width: LinearRange::exact(size.width),
                height: LinearRange::exact(size.height),
            },
            preferred: size,
        }
    }

    /// Tolerates `min..=max` on each axis, preferring `preferred`.
    #[inline]
    pub fn between(min: ScreenSpaceSize, max: ScreenSpaceSize, preferred: ScreenSpaceSize) -> Self {
        Self {
            range: ScreenSpaceRange {
                width: LinearRange::new(min.width, max.width),
                height: LinearRange::new(min.height, max.height),
            },
            preferred,
        }
    }

    /// Narrows the range and widens the preferred size.
    #[must_use]
    pub fn intersect(mut self, other: Self) -> Self {
        self.preferred.expand(other.preferred);
        self.range = self.range.intersect(other.range);
        self
    }

    /// Requirements of `count` copies stacked on top of each other.
    #[must_use]
    pub fn stacked_vertically(mut self, count: usize) -> Self {
        self.range.height = self.range.height.scaled(count);
        self.preferred.height = self.preferred.height.saturating_mul(count);
        self
    }

    /// Whether `size` may be adopted.
    pub fn check(&self, size: ScreenSpaceSize) -> Result<(), LayoutError> {
        if self.range.is_empty() {
            return Err(LayoutError::EmptyRange(self.range));
        }
        if !self.range.contains(size) {
            return Err(LayoutError::OutOfRange { requested: size, range: self.range });
        }
        Ok(())
    }
}

impl Default for SpaceRange {
    fn default() -> Self {
        Self::any()
    }
}
