use crate::coords::{Vec2, Viewport};
use crate::input::{MouseAction, MouseButton};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Callbacks a window implementation invokes on the application.
///
/// Everything except `on_frame` defaults to a no-op.
pub trait App {
    /// Called once before the first frame, with the window size.
    fn setup(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Cursor moved to `point` (normalized).
    fn on_mouse_moved(&mut self, point: Vec2) {
        let _ = point;
    }

    /// A mouse button changed state at `point` (normalized).
    fn on_mouse_button(&mut self, point: Vec2, button: MouseButton, action: MouseAction) {
        let _ = (point, button, action);
    }

    /// A new frames-per-second figure is available.
    fn on_fps_updated(&mut self, fps: u32) {
        let _ = fps;
    }
}
