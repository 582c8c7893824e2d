use axp_engine::coords::Rect;

use crate::error::LayoutError;
use crate::event::{EventResult, MouseEvent};
use crate::painter::Painter;
use crate::space::{ScreenSpaceSize, SpaceRange};
use crate::widget::Widget;
use crate::widgets::DraggableWindow;

/// A desktop of freely placed [`DraggableWindow`]s.
///
/// Windows must not overlap: mouse events go to the first window whose
/// subspace contains the cursor, in insertion order.
pub struct Windows {
    windows: Vec<DraggableWindow>,
}

impl Windows {
    pub fn new() -> Self {
        Self { windows: Vec::new() }
    }

    pub fn window(mut self, window: DraggableWindow) -> Self {
        self.windows.push(window);
        self
    }

    pub fn windows(&self) -> &[DraggableWindow] {
        &self.windows
    }

    /// Subspaces of all windows, in insertion order.
    pub fn placements(&self) -> Vec<Rect> {
        self.windows.iter().map(DraggableWindow::subspace).collect()
    }
}

impl Default for Windows {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Windows {
    fn draw(&self, painter: &mut Painter<'_>) {
        for window in &self.windows {
            window.draw_in(painter, window.subspace());
        }
    }

    fn desired_space(&self) -> SpaceRange {
        SpaceRange::any()
    }

    /// Windows keep their own sizes; the desktop takes whatever it gets.
    fn resize(&mut self, new_size: ScreenSpaceSize) -> Result<(), LayoutError> {
        log::debug!("desktop resized to {}x{}", new_size.width, new_size.height);
        Ok(())
    }

    fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult {
        for (index, window) in self.windows.iter_mut().enumerate() {
            let subspace = window.subspace();
            if subspace.contains(event.point) {
                log::trace!("desktop: {:?} -> window {index}", event.kind);
                return window.mouse_event_in(event, subspace);
            }
        }
        EventResult::Ignored
    }
}
