//! Built-in widgets.

pub mod draggable_window;
pub mod list;
pub mod solid_button;
pub mod windows;

pub use draggable_window::DraggableWindow;
pub use list::EquallySpacedList;
pub use solid_button::SolidButton;
pub use windows::Windows;
