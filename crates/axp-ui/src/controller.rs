use axp_engine::coords::{Vec2, Viewport};
use axp_engine::core::{App, AppControl, FrameCtx, FrameTarget};
use axp_engine::input::MouseAction;
use axp_engine::scene::DrawList;

use crate::error::{InputError, LayoutError};
use crate::event::{EventResult, MouseButton, MouseEvent};
use crate::painter::Painter;
use crate::space::ScreenSpaceSize;
use crate::widget::Element;

/// Where the primary button and cursor are, as far as the window knows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Idle,
    Hovering,
    Pressing,
    Dragging,
}

impl InputState {
    /// Whether the primary button is down.
    #[inline]
    pub fn is_pressed(self) -> bool {
        matches!(self, InputState::Pressing | InputState::Dragging)
    }
}

/// Top-level window controller for a widget tree.
///
/// Turns raw press / release / move notifications into [`MouseEvent`]s and
/// hands each one to the root widget as soon as it is produced:
///
/// | state               | press            | release         | move                      |
/// |---------------------|------------------|-----------------|---------------------------|
/// | Idle, Hovering      | Hover → Pressing | error           | Hover → Hovering          |
/// | Pressing, Dragging  | error            | Click → Idle    | Drag(delta) → Dragging    |
///
/// Drag deltas are measured from the last recorded cursor position, which
/// press and move update. A press with no following move stays in
/// `Pressing` indefinitely.
pub struct UiWindow {
    root: Element,
    state: InputState,
    last_cursor: Vec2,
    size: Option<ScreenSpaceSize>,
    viewport: Option<Viewport>,
}

impl UiWindow {
    pub fn new(root: impl Into<Element>) -> Self {
        Self {
            root: root.into(),
            state: InputState::Idle,
            last_cursor: Vec2::zero(),
            size: None,
            viewport: None,
        }
    }

    #[inline]
    pub fn state(&self) -> InputState {
        self.state
    }

    #[inline]
    pub fn last_cursor(&self) -> Vec2 {
        self.last_cursor
    }

    /// Size adopted by the last successful [`resize`](Self::resize).
    #[inline]
    pub fn size(&self) -> Option<ScreenSpaceSize> {
        self.size
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    // ── transitions ───────────────────────────────────────────────────────

    /// Primary button went down at `point`.
    pub fn press(&mut self, point: Vec2) -> Result<(), InputError> {
        if self.state.is_pressed() {
            return Err(InputError::AlreadyPressed { state: self.state });
        }
        // Flush movement since the last event before the press takes effect.
        self.send(MouseEvent::hover(point));
        self.switch_to(InputState::Pressing, point);
        Ok(())
    }

    /// Primary button went up at `point`.
    pub fn release(&mut self, point: Vec2) -> Result<(), InputError> {
        if !self.state.is_pressed() {
            return Err(InputError::NotPressed { state: self.state });
        }
        self.send(MouseEvent::click(point, MouseButton::Left));
        self.state = InputState::Idle;
        log::debug!("input: {:?}", self.state);
        Ok(())
    }

    /// Cursor moved to `point`.
    pub fn move_to(&mut self, point: Vec2) {
        if self.state.is_pressed() {
            let delta = point - self.last_cursor;
            self.send(MouseEvent::drag(point, delta));
            self.switch_to(InputState::Dragging, point);
        } else {
            self.send(MouseEvent::hover(point));
            self.switch_to(InputState::Hovering, point);
        }
    }

    /// Cursor moved to window pixel `pixel`.
    ///
    /// Needs the viewport reported by [`App::setup`]; before that, or for a
    /// position the viewport cannot map, the move is dropped.
    pub fn move_to_pixel(&mut self, pixel: Vec2) {
        match self.viewport.and_then(|v| v.to_normalized(pixel)) {
            Some(point) => self.move_to(point),
            None => log::warn!("dropping cursor move to pixel {pixel:?}"),
        }
    }

    /// Raw button notification from the windowing layer.
    ///
    /// Only the left button drives the state machine; other buttons and
    /// `Repeat` actions are ignored.
    pub fn on_mouse_event(
        &mut self,
        point: Vec2,
        button: MouseButton,
        action: MouseAction,
    ) -> Result<(), InputError> {
        if button != MouseButton::Left {
            log::trace!("ignoring {button} button {:?}", action);
            return Ok(());
        }
        match action {
            MouseAction::Press => self.press(point),
            MouseAction::Release => self.release(point),
            MouseAction::Repeat => Ok(()),
        }
    }

    fn send(&mut self, event: MouseEvent) -> EventResult {
        let result = self.root.on_mouse_event(event);
        log::trace!("{:?} at {:?}: {:?}", event.kind, event.point, result);
        result
    }

    fn switch_to(&mut self, state: InputState, point: Vec2) {
        if state != self.state {
            log::debug!("input: {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.last_cursor = point;
    }

    // ── layout & drawing ──────────────────────────────────────────────────

    /// Lay the tree out for `size`.
    ///
    /// On failure the previous size stays in effect and the error is
    /// returned to the caller.
    pub fn resize(&mut self, size: ScreenSpaceSize) -> Result<(), LayoutError> {
        let attempt = self.root.desired_space().check(size).and_then(|()| self.root.resize(size));
        match attempt {
            Ok(()) => {
                self.size = Some(size);
                log::debug!("layout: {}x{}", size.width, size.height);
                Ok(())
            }
            Err(err) => {
                log::warn!("layout for {}x{} failed, keeping {:?}: {err}", size.width, size.height, self.size);
                Err(err)
            }
        }
    }

    /// Record the whole tree into `draw_list`.
    pub fn draw(&self, draw_list: &mut DrawList) {
        let mut painter = Painter::new(draw_list);
        self.root.draw(&mut painter);
    }
}

impl App for UiWindow {
    fn setup(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        // Failure is already logged; the tree keeps its default layout.
        let _ = self.resize(ScreenSpaceSize::new(viewport.width, viewport.height));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        match &mut ctx.target {
            FrameTarget::Vector(list) => self.draw(list),
            FrameTarget::Pixels(_) => log::warn!("widget tree cannot draw to a pixel surface"),
        }
        AppControl::Continue
    }

    fn on_mouse_moved(&mut self, point: Vec2) {
        self.move_to(point);
    }

    fn on_mouse_button(&mut self, point: Vec2, button: MouseButton, action: MouseAction) {
        if let Err(err) = self.on_mouse_event(point, button, action) {
            log::warn!("dropping button event: {err}");
        }
    }

    fn on_fps_updated(&mut self, fps: u32) {
        log::info!("FPS: {fps}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::event::MouseEventKind;
    use crate::space::SpaceRange;
    use crate::widget::Widget;
    use crate::widgets::{DraggableWindow, SolidButton, Windows};
    use axp_engine::coords::{ColorRgba, Rect};

    type Log = Rc<RefCell<Vec<MouseEvent>>>;

    /// Root widget that remembers every event it receives.
    struct Recorder(Log);

    impl Widget for Recorder {
        fn draw(&self, _painter: &mut Painter<'_>) {}

        fn desired_space(&self) -> SpaceRange {
            SpaceRange::any()
        }

        fn resize(&mut self, _new_size: ScreenSpaceSize) -> Result<(), LayoutError> {
            Ok(())
        }

        fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult {
            self.0.borrow_mut().push(event);
            EventResult::Consumed
        }
    }

    fn recording_window() -> (UiWindow, Log) {
        let log = Log::default();
        (UiWindow::new(Recorder(log.clone())), log)
    }

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── event synthesis ───────────────────────────────────────────────────

    #[test]
    fn press_drag_release_sequence() {
        let (mut w, log) = recording_window();
        let (p0, p1, p2, p3) = (p(0.1, 0.1), p(0.3, 0.2), p(0.4, 0.6), p(0.4, 0.7));

        w.press(p0).unwrap();
        w.move_to(p1);
        w.move_to(p2);
        w.release(p3).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                MouseEvent::hover(p0),
                MouseEvent::drag(p1, p1 - p0),
                MouseEvent::drag(p2, p2 - p1),
                MouseEvent::click(p3, MouseButton::Left),
            ]
        );
        assert_eq!(w.state(), InputState::Idle);
    }

    #[test]
    fn moves_without_button_hover() {
        let (mut w, log) = recording_window();
        w.move_to(p(0.5, 0.5));
        w.move_to(p(0.6, 0.5));
        assert_eq!(w.state(), InputState::Hovering);
        assert_eq!(w.last_cursor(), p(0.6, 0.5));
        assert!(log.borrow().iter().all(|e| e.kind == MouseEventKind::Hover));
    }

    #[test]
    fn held_press_stays_pressing() {
        let (mut w, log) = recording_window();
        w.move_to(p(0.0, 0.0));
        w.press(p(0.2, 0.2)).unwrap();
        assert_eq!(w.state(), InputState::Pressing);
        assert_eq!(w.last_cursor(), p(0.2, 0.2));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn click_without_move_goes_from_pressing_to_idle() {
        let (mut w, log) = recording_window();
        w.press(p(0.0, 0.0)).unwrap();
        w.release(p(0.0, 0.0)).unwrap();
        assert_eq!(w.state(), InputState::Idle);
        assert_eq!(log.borrow().last().unwrap().kind, MouseEventKind::Click { button: MouseButton::Left });
    }

    // ── rejected transitions ──────────────────────────────────────────────

    #[test]
    fn double_press_is_rejected() {
        let (mut w, log) = recording_window();
        w.press(p(0.0, 0.0)).unwrap();
        assert_eq!(
            w.press(p(0.1, 0.1)),
            Err(InputError::AlreadyPressed { state: InputState::Pressing })
        );
        w.move_to(p(0.2, 0.2));
        assert_eq!(
            w.press(p(0.2, 0.2)),
            Err(InputError::AlreadyPressed { state: InputState::Dragging })
        );
        // Rejected presses emit nothing and change nothing.
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(w.state(), InputState::Dragging);
    }

    #[test]
    fn double_release_is_rejected() {
        let (mut w, _log) = recording_window();
        assert_eq!(w.release(p(0.0, 0.0)), Err(InputError::NotPressed { state: InputState::Idle }));
        w.press(p(0.0, 0.0)).unwrap();
        w.release(p(0.0, 0.0)).unwrap();
        assert_eq!(w.release(p(0.0, 0.0)), Err(InputError::NotPressed { state: InputState::Idle }));
        w.move_to(p(0.5, 0.5));
        assert_eq!(w.release(p(0.5, 0.5)), Err(InputError::NotPressed { state: InputState::Hovering }));
    }

    // ── raw notifications ─────────────────────────────────────────────────

    #[test]
    fn non_left_buttons_and_repeat_are_ignored() {
        let (mut w, log) = recording_window();
        w.on_mouse_event(p(0.0, 0.0), MouseButton::Right, MouseAction::Press).unwrap();
        w.on_mouse_event(p(0.0, 0.0), MouseButton::Left, MouseAction::Press).unwrap();
        w.on_mouse_event(p(0.0, 0.0), MouseButton::Left, MouseAction::Repeat).unwrap();
        assert_eq!(w.state(), InputState::Pressing);
        assert_eq!(log.borrow().len(), 1);
        w.on_mouse_event(p(0.0, 0.0), MouseButton::Left, MouseAction::Release).unwrap();
        assert_eq!(w.state(), InputState::Idle);
    }

    #[test]
    fn pixel_moves_need_a_viewport() {
        let (mut w, log) = recording_window();
        w.move_to_pixel(p(5.0, 5.0));
        assert!(log.borrow().is_empty());

        App::setup(&mut w, Viewport::new(10, 10));
        w.move_to_pixel(p(5.0, 5.0));
        assert_eq!(w.state(), InputState::Hovering);
        assert_eq!(w.last_cursor(), p(0.0, 0.0));
    }

    #[test]
    fn app_callbacks_swallow_rejected_transitions() {
        let (mut w, log) = recording_window();
        App::on_mouse_button(&mut w, p(0.0, 0.0), MouseButton::Left, MouseAction::Release);
        assert_eq!(w.state(), InputState::Idle);
        assert!(log.borrow().is_empty());
    }

    // ── end to end ────────────────────────────────────────────────────────

    fn frame_rect(ui: &UiWindow) -> Rect {
        let mut list = DrawList::new();
        ui.draw(&mut list);
        match &list.items()[0] {
            axp_engine::scene::DrawCmd::Rect { rect, .. } => *rect,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn dragging_a_window_frame_moves_it() {
        let window = DraggableWindow::new(SolidButton::new(ColorRgba::white()))
            .at(Rect::new(p(-0.5, -0.5), p(0.5, 0.5)));
        let mut ui = UiWindow::new(Windows::new().window(window));

        // Slide along the left frame edge so every event stays on the frame.
        ui.press(p(-0.495, 0.0)).unwrap();
        ui.move_to(p(-0.495, 0.25));
        ui.release(p(-0.495, 0.25)).unwrap();

        let rect = frame_rect(&ui);
        assert!((rect.min().x - -0.5).abs() < 1e-5);
        assert!((rect.max().x - 0.5).abs() < 1e-5);
        assert!((rect.min().y - -0.25).abs() < 1e-5);
        assert!((rect.max().y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn drag_leaving_the_frame_goes_to_the_content() {
        let (recorder, log) = {
            let log = Log::default();
            (Recorder(log.clone()), log)
        };
        let window = DraggableWindow::new(recorder).at(Rect::new(p(-0.5, -0.5), p(0.5, 0.5)));
        let mut ui = UiWindow::new(Windows::new().window(window));

        // Grab the frame, then move into the content area in one step.
        ui.press(p(-0.495, 0.0)).unwrap();
        ui.move_to(p(-0.245, 0.0));

        assert_eq!(frame_rect(&ui), Rect::new(p(-0.5, -0.5), p(0.5, 0.5)));
        let events = log.borrow();
        assert_eq!(events.len(), 1);
        match events[0].kind {
            MouseEventKind::Drag { delta } => assert!((delta - p(0.25, 0.0)).len() < 1e-5),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn failed_resize_keeps_previous_size() {
        let button = SolidButton::new(ColorRgba::white())
            .space(SpaceRange::between(ScreenSpaceSize::new(10, 10), ScreenSpaceSize::new(100, 100), ScreenSpaceSize::ZERO));
        let mut ui = UiWindow::new(button);
        ui.resize(ScreenSpaceSize::new(50, 50)).unwrap();
        assert!(ui.resize(ScreenSpaceSize::new(500, 50)).is_err());
        assert_eq!(ui.size(), Some(ScreenSpaceSize::new(50, 50)));
    }
}
