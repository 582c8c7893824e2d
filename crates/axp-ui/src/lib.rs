//! Retained widget tree on top of `axp-engine`.
//!
//! Every widget draws and receives input in its own normalized space,
//! `[-1, 1]²`. Containers place children by handing them a sub-rectangle of
//! that space; the [`Axes`](axp_engine::coords::Axes) built from it maps
//! draw calls outward and pointer events inward.
//!
//! ```rust,ignore
//! use axp_ui::prelude::*;
//!
//! let menu = EquallySpacedList::new()
//!     .child(SolidButton::new(ColorRgba::new(0.8, 0.2, 0.2, 1.0)).on_click(|_| log::info!("red")))
//!     .child(SolidButton::new(ColorRgba::new(0.2, 0.8, 0.2, 1.0)).on_click(|_| log::info!("green")));
//! let desktop = Windows::new().window(DraggableWindow::new(menu));
//!
//! HeadlessRuntime::new(RuntimeConfig::default()).run(&mut UiWindow::new(desktop), 60, &[])?;
//! ```

pub mod controller;
pub mod error;
pub mod event;
pub mod painter;
pub mod space;
pub mod widget;
pub mod widgets;

pub use controller::{InputState, UiWindow};

/// Everything needed to build a tree or write a custom widget.
pub mod prelude {
    pub use crate::controller::{InputState, UiWindow};
    pub use crate::error::{InputError, LayoutError};
    pub use crate::event::{EventResult, MouseButton, MouseEvent, MouseEventKind};
    pub use crate::painter::Painter;
    pub use crate::space::{LinearRange, ScreenSpaceRange, ScreenSpaceSize, SpaceRange};
    pub use crate::widget::{dispatch_mouse_event, Element, MouseHandler, Widget};
    pub use crate::widgets::{DraggableWindow, EquallySpacedList, SolidButton, Windows};

    pub use axp_engine::coords::{Axes, ColorRgba, Rect, Vec2};
    pub use axp_engine::window::{HeadlessRuntime, RuntimeConfig};
}
