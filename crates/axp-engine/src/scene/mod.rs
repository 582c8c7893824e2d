//! Scene (draw stream) types.
//!
//! The UI records abstract commands here; an external renderer turns them
//! into GPU draw calls.

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;
