//! axp engine crate.
//!
//! Geometry, input, timing, the abstract draw stream and the CPU pixel
//! pipeline shared by the UI and the raycaster, plus the contract a window
//! runtime uses to drive them.

pub mod core;
pub mod coords;
pub mod input;
pub mod logging;
pub mod pixel;
pub mod scene;
pub mod time;
pub mod window;
