use crate::coords::{ColorRgba, Rect, Vec2};

/// Renderer-agnostic draw command, in root normalized coordinates.
///
/// Color and line width are drawing-context state on the producing side;
/// they are resolved into each command when it is issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        color: ColorRgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: ColorRgba,
    },
}
