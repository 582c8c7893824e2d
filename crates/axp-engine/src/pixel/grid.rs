use anyhow::{ensure, Result};
use rayon::prelude::*;

use crate::coords::{ColorRgba, Vec2, Vec3, Viewport};

use super::ColoredVertex;

/// A window-sized grid of points recolored every frame by a pixel kernel.
///
/// Positions are computed once at construction: column `c` maps to
/// `x = 2c / width - 1`, row `r` to `y = 2r / height - 1`. Storage is
/// row-major.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    viewport: Viewport,
    vertices: Vec<ColoredVertex>,
}

impl PixelGrid {
    pub fn new(viewport: Viewport) -> Result<Self> {
        ensure!(
            viewport.is_valid(),
            "pixel grid needs a non-empty viewport, got {}x{}",
            viewport.width,
            viewport.height
        );

        let w = viewport.width as f32;
        let h = viewport.height as f32;
        let vertices = (0..viewport.height)
            .flat_map(|row| {
                (0..viewport.width).map(move |col| {
                    ColoredVertex::new([2.0 * col as f32 / w - 1.0, 2.0 * row as f32 / h - 1.0])
                })
            })
            .collect();

        Ok(Self { viewport, vertices })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn vertices(&self) -> &[ColoredVertex] {
        &self.vertices
    }

    /// Raw vertex bytes, ready for a buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Color of the pixel at `(col, row)`, if it lies inside the grid.
    pub fn color_at(&self, col: usize, row: usize) -> Option<ColorRgba> {
        if col >= self.viewport.width || row >= self.viewport.height {
            return None;
        }
        let [r, g, b] = self.vertices[row * self.viewport.width + col].color;
        Some(ColorRgba::new(r, g, b, 1.0))
    }

    /// Recolors every pixel through `kernel(position, index)`.
    ///
    /// Pixels are independent, so the kernel runs on the rayon pool; it may
    /// only read shared state. Results are saturated to `[0, 1]`.
    pub fn shade<F>(&mut self, kernel: F)
    where
        F: Fn(Vec2, usize) -> Vec3 + Sync,
    {
        self.vertices
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, vertex)| {
                let pos = Vec2::new(vertex.pos[0], vertex.pos[1]);
                let c = ColorRgba::from_rgb(kernel(pos, index));
                vertex.color = [c.r, c.g, c.b];
            });
    }
}
