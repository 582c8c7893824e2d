use super::Vec2;

/// Window size in device pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width * self.height
    }

    /// Maps a pixel-space cursor position (origin top-left) to `[-1, 1]²`.
    ///
    /// Returns `None` for an empty viewport.
    pub fn to_normalized(self, pixel: Vec2) -> Option<Vec2> {
        if !self.is_valid() {
            return None;
        }
        Some(Vec2::new(
            2.0 * pixel.x / self.width as f32 - 1.0,
            2.0 * pixel.y / self.height as f32 - 1.0,
        ))
    }
}
