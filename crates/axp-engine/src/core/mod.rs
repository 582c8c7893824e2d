//! Core contracts.
//!
//! Defines the interface between a window runtime (event pump, GPU upload)
//! and the application logic, so the latter never touches platform types.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, FrameTarget};
