//! Time subsystem.
//!
//! Frame timing utilities decoupled from any window runtime:
//! - one `FrameClock` per window, `tick()` once per presented frame
//! - one `FpsCounter` per window, fed with each tick's timestamp

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
