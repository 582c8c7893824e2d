use thiserror::Error;

use crate::controller::InputState;
use crate::space::{ScreenSpaceRange, ScreenSpaceSize};

/// A widget could not adopt the size it was given.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("size {}x{} is outside the accepted range {range:?}", .requested.width, .requested.height)]
    OutOfRange {
        requested: ScreenSpaceSize,
        range: ScreenSpaceRange,
    },

    /// Combined constraints leave no size at all.
    #[error("no size satisfies every constraint: {0:?}")]
    EmptyRange(ScreenSpaceRange),
}

/// A raw button notification that contradicts the current input state.
///
/// The state machine is left untouched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("button pressed while already down (state: {state:?})")]
    AlreadyPressed { state: InputState },

    #[error("button released while already up (state: {state:?})")]
    NotPressed { state: InputState },
}
