use std::fmt;

use crate::coords::Vec2;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// What happened to a mouse button.
///
/// `Repeat` is forwarded for completeness; most platforms never emit it for
/// mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseAction {
    Press,
    Repeat,
    Release,
}

/// Platform-agnostic input notifications delivered by the windowing layer.
///
/// Positions are already normalized to `[-1, 1]²`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerButton {
        pos: Vec2,
        button: MouseButton,
        action: MouseAction,
    },
}

impl InputEvent {
    /// Cursor position carried by the event.
    pub fn pos(&self) -> Vec2 {
        match self {
            InputEvent::PointerMoved(pos) => *pos,
            InputEvent::PointerButton { pos, .. } => *pos,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
