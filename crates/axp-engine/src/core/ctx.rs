use crate::coords::Viewport;
use crate::pixel::PixelGrid;
use crate::scene::DrawList;
use crate::time::FrameTime;

/// Where a frame's output goes.
pub enum FrameTarget<'a> {
    /// Vector drawing: record abstract draw commands.
    Vector(&'a mut DrawList),
    /// Per-pixel drawing: recolor the grid.
    Pixels(&'a mut PixelGrid),
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub time: FrameTime,
    pub viewport: Viewport,
    pub target: FrameTarget<'a>,
}
