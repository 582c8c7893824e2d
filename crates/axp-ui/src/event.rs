use axp_engine::coords::{Axes, Vec2};

pub use axp_engine::input::MouseButton;

/// What a [`MouseEvent`] reports. Each kind carries only its own payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEventKind {
    /// A button was pressed and released.
    Click { button: MouseButton },
    /// The cursor is over the widget with no button held.
    Hover,
    /// The cursor moved by `delta` while the primary button was held.
    Drag { delta: Vec2 },
}

/// Mouse input routed through the widget tree.
///
/// `point` is expressed in the receiving widget's own `[-1, 1]²` space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub point: Vec2,
    pub kind: MouseEventKind,
}

impl MouseEvent {
    #[inline]
    pub fn click(point: Vec2, button: MouseButton) -> Self {
        Self { point, kind: MouseEventKind::Click { button } }
    }

    #[inline]
    pub fn hover(point: Vec2) -> Self {
        Self { point, kind: MouseEventKind::Hover }
    }

    #[inline]
    pub fn drag(point: Vec2, delta: Vec2) -> Self {
        Self { point, kind: MouseEventKind::Drag { delta } }
    }

    /// The same event as seen by a child occupying `axes`.
    ///
    /// Only `point` is remapped. A drag `delta` keeps the units of the space
    /// it was produced in (the root window's), however deep it travels.
    #[must_use]
    pub fn transform(&self, axes: &Axes) -> Self {
        Self { point: axes.to_local(self.point), kind: self.kind }
    }
}

/// Result returned by [`Widget::on_mouse_event`](crate::widget::Widget::on_mouse_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Nobody under the cursor wanted it.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axp_engine::coords::Rect;

    #[test]
    fn transform_remaps_point_only() {
        let axes = Axes::from_rect(Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))).unwrap();
        let e = MouseEvent::drag(Vec2::new(0.75, 0.25), Vec2::new(0.1, -0.2)).transform(&axes);
        assert_eq!(e.point, Vec2::new(0.5, -0.5));
        assert_eq!(e.kind, MouseEventKind::Drag { delta: Vec2::new(0.1, -0.2) });
    }

    #[test]
    fn click_keeps_button() {
        let e = MouseEvent::click(Vec2::zero(), MouseButton::Right).transform(&Axes::IDENTITY);
        assert_eq!(e.kind, MouseEventKind::Click { button: MouseButton::Right });
    }
}
