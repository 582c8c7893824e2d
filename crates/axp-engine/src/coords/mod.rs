//! Coordinate and geometry types shared across the UI and the raycaster.
//!
//! Canonical drawing space:
//! - normalized, `(-1, -1)` to `(1, 1)` spans the whole surface
//! - every widget draws in its own `[-1, 1]²` and is mapped into its parent
//!   through [`Axes`]

mod axes;
mod color;
mod rect;
mod vec2;
mod vec3;
mod viewport;

pub use axes::Axes;
pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
