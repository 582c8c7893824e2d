//! Window runtime.
//!
//! Only a headless runtime ships here: it plays the role of the platform
//! event pump, delivering scripted input and frame callbacks to an [`App`].
//!
//! [`App`]: crate::core::App

mod runtime;

pub use runtime::{FrameOutput, HeadlessRuntime, RuntimeConfig, ScriptedInput, SurfaceKind};
