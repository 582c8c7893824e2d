use axp_engine::coords::{Rect, Vec2};

use crate::error::LayoutError;
use crate::event::{EventResult, MouseEvent};
use crate::painter::Painter;
use crate::space::{ScreenSpaceSize, SpaceRange};
use crate::widget::{Element, Widget};

/// Children stacked vertically, each given an equal slice of the height.
///
/// With `n` children and spacing `s`, every slice is `(2 - (n - 1)·s) / n`
/// tall; child 0 starts at `y = -1`. Points that land in a spacing gap reach
/// no child.
///
/// Slices are half-open like [`Rect::contains`]: a point on the boundary
/// between two children goes to the upper one, and `y = 1` reaches nobody.
pub struct EquallySpacedList {
    children: Vec<Element>,
    spacing: f32,
}

impl EquallySpacedList {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0 }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Vertical gap between neighbours, in the list's normalized units.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn slice_height(&self) -> f32 {
        let n = self.children.len() as f32;
        (2.0 - (n - 1.0) * self.spacing) / n
    }

    /// Slice of the list's space given to child `index`.
    ///
    /// `None` when `index` is out of range or the spacing leaves no room.
    pub fn child_space(&self, index: usize) -> Option<Rect> {
        if index >= self.children.len() {
            return None;
        }
        let delta = self.slice_height();
        if delta.is_nan() || delta <= 0.0 {
            return None;
        }
        let step = delta + self.spacing;
        let y0 = -1.0 + index as f32 * step;
        // Same expression as the next slice's bottom, so spacing 0 tiles exactly.
        let y1 = if index + 1 == self.children.len() {
            1.0
        } else {
            -1.0 + (index + 1) as f32 * step - self.spacing
        };
        Some(Rect::new(Vec2::new(-1.0, y0), Vec2::new(1.0, y1)))
    }

    /// Index and slice of the child under `point`.
    fn child_at(&self, point: Vec2) -> Option<(usize, Rect)> {
        (0..self.children.len())
            .filter_map(|i| self.child_space(i).map(|space| (i, space)))
            .find(|(_, space)| space.contains(point))
    }
}

impl Default for EquallySpacedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for EquallySpacedList {
    fn draw(&self, painter: &mut Painter<'_>) {
        for (i, child) in self.children.iter().enumerate() {
            if let Some(space) = self.child_space(i) {
                child.draw_in(painter, space);
            }
        }
    }

    fn desired_space(&self) -> SpaceRange {
        if self.children.is_empty() {
            return SpaceRange::any();
        }
        self.children
            .iter()
            .fold(SpaceRange::any(), |acc, child| acc.intersect(child.desired_space()))
            .stacked_vertically(self.children.len())
    }

    fn resize(&mut self, new_size: ScreenSpaceSize) -> Result<(), LayoutError> {
        let count = self.children.len();
        if count == 0 {
            return Ok(());
        }
        let slice = ScreenSpaceSize::new(new_size.width, new_size.height / count);

        // Every child gets the request even after a failure.
        let mut first_error = None;
        for child in &mut self.children {
            if let Err(err) = child.resize(slice) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => {
                log::debug!("list resized: {count} slices of {}x{}", slice.width, slice.height);
                Ok(())
            }
        }
    }

    fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult {
        match self.child_at(event.point) {
            Some((index, space)) => {
                log::trace!("list: {:?} -> child {index}", event.kind);
                self.children[index].mouse_event_in(event, space)
            }
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::event::MouseButton;
    use crate::space::LinearRange;
    use crate::widgets::SolidButton;
    use axp_engine::coords::ColorRgba;
    use axp_engine::scene::{DrawCmd, DrawList};

    fn r(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    fn size(w: usize, h: usize) -> ScreenSpaceSize {
        ScreenSpaceSize::new(w, h)
    }

    fn logging_button(id: usize, log: &Rc<RefCell<Vec<usize>>>) -> SolidButton {
        let log = log.clone();
        SolidButton::new(ColorRgba::white()).on_click(move |_| log.borrow_mut().push(id))
    }

    // ── child_space ───────────────────────────────────────────────────────

    #[test]
    fn two_children_split_height() {
        let list = EquallySpacedList::new()
            .child(SolidButton::new(ColorRgba::white()))
            .child(SolidButton::new(ColorRgba::white()));
        assert_eq!(list.child_space(0), Some(r(-1.0, -1.0, 1.0, 0.0)));
        assert_eq!(list.child_space(1), Some(r(-1.0, 0.0, 1.0, 1.0)));
        assert_eq!(list.child_space(2), None);
    }

    #[test]
    fn spacing_shrinks_slices() {
        let list = EquallySpacedList::new()
            .spacing(0.5)
            .child(SolidButton::new(ColorRgba::white()))
            .child(SolidButton::new(ColorRgba::white()));
        assert_eq!(list.child_space(0), Some(r(-1.0, -1.0, 1.0, -0.25)));
        assert_eq!(list.child_space(1), Some(r(-1.0, 0.25, 1.0, 1.0)));
    }

    #[test]
    fn draw_places_children_in_slices() {
        let list = EquallySpacedList::new()
            .child(SolidButton::new(ColorRgba::black()))
            .child(SolidButton::new(ColorRgba::white()));
        let mut draw_list = DrawList::new();
        list.draw(&mut Painter::new(&mut draw_list));
        assert_eq!(
            draw_list.items(),
            &[
                DrawCmd::Rect { rect: r(-1.0, -1.0, 1.0, 0.0), color: ColorRgba::black() },
                DrawCmd::Rect { rect: r(-1.0, 0.0, 1.0, 1.0), color: ColorRgba::white() },
            ]
        );
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn click_reaches_child_under_point() {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let mut list = EquallySpacedList::new()
            .child(logging_button(0, &clicks))
            .child(logging_button(1, &clicks))
            .child(logging_button(2, &clicks));

        list.on_mouse_event(MouseEvent::click(Vec2::new(0.0, 0.9), MouseButton::Left));
        list.on_mouse_event(MouseEvent::click(Vec2::new(0.0, -0.9), MouseButton::Left));
        list.on_mouse_event(MouseEvent::click(Vec2::new(0.5, 0.0), MouseButton::Left));
        assert_eq!(*clicks.borrow(), vec![2, 0, 1]);
    }

    #[test]
    fn click_in_gap_or_outside_is_ignored() {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let mut list = EquallySpacedList::new()
            .spacing(0.5)
            .child(logging_button(0, &clicks))
            .child(logging_button(1, &clicks));

        let gap = MouseEvent::click(Vec2::new(0.0, 0.0), MouseButton::Left);
        let below = MouseEvent::click(Vec2::new(0.0, -1.5), MouseButton::Left);
        let above = MouseEvent::click(Vec2::new(0.0, 1.0), MouseButton::Left);
        assert_eq!(list.on_mouse_event(gap), EventResult::Ignored);
        assert_eq!(list.on_mouse_event(below), EventResult::Ignored);
        assert_eq!(list.on_mouse_event(above), EventResult::Ignored);
        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn boundary_points_reach_the_upper_child() {
        for n in 2..=9 {
            let clicks = Rc::new(RefCell::new(Vec::new()));
            let mut list = EquallySpacedList::new();
            for id in 0..n {
                list.push(logging_button(id, &clicks));
            }
            for k in 0..n {
                let y = list.child_space(k).unwrap().min().y;
                let e = MouseEvent::click(Vec2::new(0.0, y), MouseButton::Left);
                assert_eq!(list.on_mouse_event(e), EventResult::Consumed, "n = {n}, k = {k}, y = {y}");
            }
            assert_eq!(*clicks.borrow(), (0..n).collect::<Vec<_>>(), "n = {n}");
        }
    }

    #[test]
    fn top_edge_is_exclusive() {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let mut list = EquallySpacedList::new()
            .child(logging_button(0, &clicks))
            .child(logging_button(1, &clicks));
        let top = MouseEvent::click(Vec2::new(0.0, 1.0), MouseButton::Left);
        let middle = MouseEvent::click(Vec2::new(0.0, 0.0), MouseButton::Left);
        assert_eq!(list.on_mouse_event(top), EventResult::Ignored);
        assert_eq!(list.on_mouse_event(middle), EventResult::Consumed);
        assert_eq!(*clicks.borrow(), vec![1]);
    }

    #[test]
    fn unspaced_slices_tile_the_list() {
        for n in 1..=9 {
            let mut list = EquallySpacedList::new();
            for _ in 0..n {
                list.push(SolidButton::new(ColorRgba::white()));
            }
            assert_eq!(list.child_space(0).unwrap().min().y, -1.0);
            assert_eq!(list.child_space(n - 1).unwrap().max().y, 1.0);
            for k in 1..n {
                assert_eq!(list.child_space(k - 1).unwrap().max().y, list.child_space(k).unwrap().min().y);
            }
        }
    }

    #[test]
    fn empty_list_ignores_events() {
        let mut list = EquallySpacedList::new();
        let e = MouseEvent::hover(Vec2::zero());
        assert_eq!(list.on_mouse_event(e), EventResult::Ignored);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn empty_list_wants_anything() {
        let mut list = EquallySpacedList::new();
        assert_eq!(list.desired_space(), SpaceRange::any());
        assert!(list.resize(size(10, 10)).is_ok());
    }

    #[test]
    fn desired_space_combines_children() {
        let list = EquallySpacedList::new()
            .child(SolidButton::new(ColorRgba::white()).space(SpaceRange::between(
                size(10, 10),
                size(200, 50),
                size(50, 20),
            )))
            .child(SolidButton::new(ColorRgba::white()).space(SpaceRange::between(
                size(30, 5),
                size(100, 100),
                size(40, 30),
            )));
        let space = list.desired_space();
        assert_eq!(space.range.width, LinearRange::new(30, 100));
        assert_eq!(space.range.height, LinearRange::new(20, 100));
        assert_eq!(space.preferred, size(50, 60));
    }

    #[test]
    fn resize_divides_height() {
        let mut list = EquallySpacedList::new()
            .child(SolidButton::new(ColorRgba::white()).space(SpaceRange::exact(size(90, 30))))
            .child(SolidButton::new(ColorRgba::white()).space(SpaceRange::exact(size(90, 30))))
            .child(SolidButton::new(ColorRgba::white()).space(SpaceRange::exact(size(90, 30))));
        assert!(list.resize(size(90, 90)).is_ok());
        assert!(matches!(list.resize(size(90, 60)), Err(LayoutError::OutOfRange { .. })));
    }
}
