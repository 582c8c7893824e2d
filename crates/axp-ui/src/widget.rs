use axp_engine::coords::{Axes, Rect, Vec2};

use crate::error::LayoutError;
use crate::event::{EventResult, MouseButton, MouseEvent, MouseEventKind};
use crate::painter::Painter;
use crate::space::{ScreenSpaceSize, SpaceRange};

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// A widget lives in its own normalized space: `(-1, -1)` and `(1, 1)` are
/// opposite corners of whatever area its parent gave it. Parents never hand
/// out parent-space coordinates; they call [`draw_in`](Self::draw_in) and
/// [`mouse_event_in`](Self::mouse_event_in), which remap through [`Axes`].
pub trait Widget: 'static {
    /// Describe the look of the widget.
    ///
    /// Drawing outside `[-1, 1]²` is not clipped; what happens then is up to
    /// the renderer.
    fn draw(&self, painter: &mut Painter<'_>);

    /// Space requirements: sizes this widget tolerates and the one it prefers.
    ///
    /// Bitmap-like widgets want an exact size, vector widgets a range, and
    /// canvas-like widgets anything at all. Containers combine the answers
    /// of their children.
    fn desired_space(&self) -> SpaceRange;

    /// Adopt `new_size` (device pixels). Containers forward a share of it to
    /// every child.
    fn resize(&mut self, new_size: ScreenSpaceSize) -> Result<(), LayoutError>;

    /// Route a mouse event whose `point` is in this widget's space.
    fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult;

    // ── subspace helpers ──────────────────────────────────────────────────

    /// Draw this widget into the `subspace` of the painter's space.
    fn draw_in(&self, painter: &mut Painter<'_>, subspace: Rect) {
        match painter.with_subspace(subspace) {
            Some(mut child) => self.draw(&mut child),
            None => log::warn!("skipping draw into degenerate subspace {:?}", subspace),
        }
    }

    /// Deliver `event` (in the parent's space) to this widget occupying `subspace`.
    fn mouse_event_in(&mut self, event: MouseEvent, subspace: Rect) -> EventResult {
        match Axes::from_rect(subspace) {
            Some(axes) => self.on_mouse_event(event.transform(&axes)),
            None => EventResult::Ignored,
        }
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased, owned widget: the child type of every container.
///
/// Any `Widget` converts to `Element` via `From` / `Into`. Dropping a
/// container drops its children with it.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn draw(&self, painter: &mut Painter<'_>) {
        self.0.draw(painter)
    }

    #[inline]
    pub fn draw_in(&self, painter: &mut Painter<'_>, subspace: Rect) {
        self.0.draw_in(painter, subspace)
    }

    #[inline]
    pub fn desired_space(&self) -> SpaceRange {
        self.0.desired_space()
    }

    #[inline]
    pub fn resize(&mut self, new_size: ScreenSpaceSize) -> Result<(), LayoutError> {
        self.0.resize(new_size)
    }

    #[inline]
    pub fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult {
        self.0.on_mouse_event(event)
    }

    #[inline]
    pub fn mouse_event_in(&mut self, event: MouseEvent, subspace: Rect) -> EventResult {
        self.0.mouse_event_in(event, subspace)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

// ── MouseHandler ──────────────────────────────────────────────────────────

/// Per-kind mouse callbacks for leaf widgets.
///
/// Implement only the kinds you care about and forward
/// [`Widget::on_mouse_event`] to [`dispatch_mouse_event`].
pub trait MouseHandler {
    fn on_click(&mut self, point: Vec2, button: MouseButton) -> EventResult {
        let _ = (point, button);
        EventResult::Ignored
    }

    fn on_hover(&mut self, point: Vec2) -> EventResult {
        let _ = point;
        EventResult::Ignored
    }

    fn on_drag(&mut self, point: Vec2, delta: Vec2) -> EventResult {
        let _ = (point, delta);
        EventResult::Ignored
    }
}

/// Calls the [`MouseHandler`] method matching the event's kind.
pub fn dispatch_mouse_event<H: MouseHandler + ?Sized>(handler: &mut H, event: MouseEvent) -> EventResult {
    match event.kind {
        MouseEventKind::Click { button } => handler.on_click(event.point, button),
        MouseEventKind::Hover => handler.on_hover(event.point),
        MouseEventKind::Drag { delta } => handler.on_drag(event.point, delta),
    }
}
