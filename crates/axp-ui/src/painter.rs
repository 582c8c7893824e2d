use axp_engine::coords::{Axes, ColorRgba, Rect, Vec2};
use axp_engine::scene::{DrawCmd, DrawList};

/// Drawing context passed to [`Widget::draw`](crate::widget::Widget::draw).
///
/// Widgets draw in their own `[-1, 1]²`; the painter carries the composed
/// mapping from that space to the root surface and resolves every command
/// into root coordinates. Color and line width are sticky state, inherited
/// by child painters.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    axes: Axes,
    color: ColorRgba,
    width: f32,
}

impl<'a> Painter<'a> {
    pub const DEFAULT_LINE_WIDTH: f32 = 0.01;

    /// Painter covering the whole surface.
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self {
            draw_list,
            axes: Axes::IDENTITY,
            color: ColorRgba::white(),
            width: Self::DEFAULT_LINE_WIDTH,
        }
    }

    /// Painter for a child occupying `subspace` of this painter's space.
    ///
    /// Returns `None` for a degenerate subspace.
    pub fn with_subspace(&mut self, subspace: Rect) -> Option<Painter<'_>> {
        let local = Axes::from_rect(subspace)?;
        Some(Painter {
            draw_list: &mut *self.draw_list,
            axes: self.axes.then(&local),
            color: self.color,
            width: self.width,
        })
    }

    /// Mapping from this painter's space to the root surface.
    #[inline]
    pub fn axes(&self) -> Axes {
        self.axes
    }

    #[inline]
    pub fn color(&self) -> ColorRgba {
        self.color
    }

    // ── state ─────────────────────────────────────────────────────────────

    pub fn set_color(&mut self, color: impl Into<ColorRgba>) {
        self.color = color.into();
    }

    /// Line width in root units.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Filled rectangle spanning corners `a` and `b`.
    pub fn draw_rectangle(&mut self, a: Vec2, b: Vec2) {
        let rect = Rect::new(self.axes.to_parent(a), self.axes.to_parent(b));
        self.draw_list.push(DrawCmd::Rect { rect, color: self.color });
    }

    /// Segment from `from` to `to` at the current width.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.draw_list.push(DrawCmd::Line {
            from: self.axes.to_parent(from),
            to: self.axes.to_parent(to),
            width: self.width,
            color: self.color,
        });
    }
}
