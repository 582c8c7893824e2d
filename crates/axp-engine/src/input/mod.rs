//! Input subsystem.
//!
//! Public API is platform-agnostic. The windowing layer is responsible for
//! translating its own events into [`InputEvent`]s.

mod types;

pub use types::{InputEvent, MouseAction, MouseButton};
