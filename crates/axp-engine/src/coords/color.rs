use super::Vec3;

/// Linear RGBA color.
///
/// Output type of pixel kernels; also stands in for a 4-component vector.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Opaque color from an RGB vector, saturated to `[0, 1]`.
    #[inline]
    pub fn from_rgb(rgb: Vec3) -> Self {
        Self::new(
            rgb.x.clamp(0.0, 1.0),
            rgb.y.clamp(0.0, 1.0),
            rgb.z.clamp(0.0, 1.0),
            1.0,
        )
    }

    #[inline]
    pub fn rgb(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<Vec3> for ColorRgba {
    fn from(rgb: Vec3) -> Self {
        Self::from_rgb(rgb)
    }
}
