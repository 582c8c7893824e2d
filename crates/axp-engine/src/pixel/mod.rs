//! CPU pixel pipeline: a grid of colored points recomputed each frame by a
//! per-pixel kernel closure.

mod grid;
mod vertex;

pub use grid::PixelGrid;
pub use vertex::ColoredVertex;
