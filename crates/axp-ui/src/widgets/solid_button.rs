use axp_engine::coords::{ColorRgba, Vec2};

use crate::error::LayoutError;
use crate::event::{EventResult, MouseButton, MouseEvent};
use crate::painter::Painter;
use crate::space::{ScreenSpaceSize, SpaceRange};
use crate::widget::{dispatch_mouse_event, MouseHandler, Widget};

/// A flat colored block filling its whole space.
///
/// Accepts any size unless constrained with [`space`](Self::space).
///
/// # Example
/// ```rust,ignore
/// SolidButton::new(ColorRgba::new(0.3, 0.5, 0.7, 1.0))
///     .on_click(|button| log::info!("{button} click"))
/// ```
pub struct SolidButton {
    color: ColorRgba,
    space: SpaceRange,
    size: Option<ScreenSpaceSize>,
    on_click: Option<Box<dyn FnMut(MouseButton)>>,
}

impl SolidButton {
    pub fn new(color: impl Into<ColorRgba>) -> Self {
        Self {
            color: color.into(),
            space: SpaceRange::any(),
            size: None,
            on_click: None,
        }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut(MouseButton) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Restrict the sizes this button accepts.
    pub fn space(mut self, space: SpaceRange) -> Self {
        self.space = space;
        self
    }

    /// Size adopted by the last successful [`Widget::resize`].
    pub fn size(&self) -> Option<ScreenSpaceSize> {
        self.size
    }
}

impl Widget for SolidButton {
    fn draw(&self, painter: &mut Painter<'_>) {
        painter.set_color(self.color);
        painter.draw_rectangle(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
    }

    fn desired_space(&self) -> SpaceRange {
        self.space
    }

    fn resize(&mut self, new_size: ScreenSpaceSize) -> Result<(), LayoutError> {
        self.space.check(new_size)?;
        self.size = Some(new_size);
        Ok(())
    }

    fn on_mouse_event(&mut self, event: MouseEvent) -> EventResult {
        dispatch_mouse_event(self, event)
    }
}

impl MouseHandler for SolidButton {
    fn on_click(&mut self, _point: Vec2, button: MouseButton) -> EventResult {
        if let Some(f) = &mut self.on_click {
            f(button);
        }
        EventResult::Consumed
    }
}
