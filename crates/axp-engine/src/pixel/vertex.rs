use bytemuck::{Pod, Zeroable};

/// One point of the pixel grid as uploaded to the GPU: position in `[-1, 1]²`
/// followed by an RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub pos: [f32; 2],
    pub color: [f32; 3],
}

impl ColoredVertex {
    pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

    #[inline]
    pub const fn new(pos: [f32; 2]) -> Self {
        Self { pos, color: Self::DEFAULT_COLOR }
    }
}
