use axp_engine::coords::{ColorRgba, Rect, Vec2};

use crate::error::LayoutError;
use crate::event::{EventResult, MouseEvent, MouseEventKind};
use crate::painter::Painter;
use crate::space::{ScreenSpaceSize, SpaceRange};
use crate::widget::{Element, Widget};

/// Area of the window given to its content; the rest is the frame.
const CONTENT_SPACE: Rect = Rect::new(Vec2::new(-0.97, -0.97), Vec2::new(0.97, 0.97));

/// A framed window around a single child that can be moved by dragging its
/// frame.
///
/// `subspace` is where the window sits in its parent's space. Each drag
/// event is routed by its own point: one that lands on the frame shifts the
/// window by its delta, one inside the content area goes to the child even
/// when the drag started on the frame. The window holds no grab.
pub struct DraggableWindow {
    child: Element,
    subspace: Rect,
    frame_color: ColorRgba,
}

impl DraggableWindow {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            subspace: Rect::new(Vec2::new(-0.5, -0.5), Vec2::new(0.5, 0.5)),
            frame_color: ColorRgba::new(0.1, 0.33, 0.2, 1.0),
        }
    }

    /// Initial placement in the parent's space.
    pub fn at(mut self, subspace: Rect) -> Self {
        self.subspace = subspace;
        self
    }

    pub fn frame_color(mut self, color: impl Into<ColorRgba>) -> Self {
        self.frame_color = color.into();
        self
    }

    #[inline]
    pub fn subspace(&self) -> Rect {
        self.subspace
    }

    /// The part of the window's own space given to the child.
    #[inline]
    pub fn content_space(&self) -> Rect {
        CONTENT_SPACE
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.subspace = self.subspace.translated(delta);
    }
}

impl Widget for DraggableWindow {
    fn draw(&self, painter: &mut Painter<'_>) {
        painter.set_color(self.frame_color);
        painter.draw_rectangle(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));

        self.child.draw_in(painter, CONTENT_SPACE);
    }

    // TODO: account for the frame once sizes are known in pixels
    fn desired_space(&self) -> SpaceRange {
        self.child.desired_space()
    }

    fn resize(&mut self, new_size: ScreenSpaceSize) -> Result<(), LayoutError> {
        self.child.resize(new_size)
    }

    fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult {
        if CONTENT_SPACE.contains(event.point) {
            return self.child.mouse_event_in(event, CONTENT_SPACE);
        }

        match event.kind {
            MouseEventKind::Drag { delta } => {
                self.move_by(delta);
                log::debug!("window dragged by {:?} to {:?}", delta, self.subspace);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::event::MouseButton;
    use crate::widgets::SolidButton;
    use axp_engine::scene::{DrawCmd, DrawList};

    fn r(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    #[test]
    fn drag_on_frame_moves_window() {
        let mut w = DraggableWindow::new(SolidButton::new(ColorRgba::white()));
        let on_frame = Vec2::new(-0.99, 0.0);
        let result = w.on_mouse_event(MouseEvent::drag(on_frame, Vec2::new(0.25, 0.125)));
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(w.subspace(), r(-0.25, -0.375, 0.75, 0.625));
    }

    #[test]
    fn non_drag_on_frame_is_ignored() {
        let mut w = DraggableWindow::new(SolidButton::new(ColorRgba::white()));
        let before = w.subspace();
        let e = MouseEvent::click(Vec2::new(0.0, 0.99), MouseButton::Left);
        assert_eq!(w.on_mouse_event(e), EventResult::Ignored);
        assert_eq!(w.on_mouse_event(MouseEvent::hover(Vec2::new(0.98, 0.0))), EventResult::Ignored);
        assert_eq!(w.subspace(), before);
    }

    #[test]
    fn events_inside_reach_child_and_keep_window_still() {
        let clicks = Rc::new(Cell::new(0));
        let seen = clicks.clone();
        let button = SolidButton::new(ColorRgba::white()).on_click(move |_| seen.set(seen.get() + 1));
        let mut w = DraggableWindow::new(button);
        let before = w.subspace();

        w.on_mouse_event(MouseEvent::click(Vec2::new(0.1, 0.1), MouseButton::Left));
        w.on_mouse_event(MouseEvent::drag(Vec2::new(0.1, 0.1), Vec2::new(0.5, 0.5)));

        assert_eq!(clicks.get(), 1);
        assert_eq!(w.subspace(), before);
    }

    #[test]
    fn draws_frame_then_content() {
        let w = DraggableWindow::new(SolidButton::new(ColorRgba::black()));
        let mut list = DrawList::new();
        w.draw(&mut Painter::new(&mut list));
        assert_eq!(list.len(), 2);
        match &list.items()[1] {
            DrawCmd::Rect { rect, color } => {
                assert_eq!(*color, ColorRgba::black());
                assert!((rect.min().x + 0.97).abs() < 1e-6);
                assert!((rect.max().y - 0.97).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn layout_is_delegated_to_child() {
        let size = ScreenSpaceSize::new(64, 32);
        let mut w = DraggableWindow::new(SolidButton::new(ColorRgba::white()).space(SpaceRange::exact(size)));
        assert_eq!(w.desired_space(), SpaceRange::exact(size));
        assert!(w.resize(ScreenSpaceSize::new(10, 10)).is_err());
    }
}
