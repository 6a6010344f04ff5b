//! Input events reported by a [`Driver`](crate::Driver).
//!
//! Mouse positions are screen-cell coordinates.

use crate::geom::Point;

/// A key the visualizer reacts to. Drivers drop every other key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Char(char),
}

/// Mouse button transitions and drags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Left button down.
    Main,
    /// Right button down.
    Secondary,
    /// Any button up.
    Release,
    /// Pointer moved with a button held.
    Move,
}

/// One input event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Msg {
    KeyDown { key: Key, ctrl: bool },
    Mouse { action: MouseAction, pos: Point },
    /// The terminal now has this many columns and rows.
    Screen { width: i32, height: i32 },
    /// The window was closed or the terminal hung up.
    Quit,
}

impl Msg {
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key, ctrl: false }
    }

    /// `key` pressed with Control held.
    pub fn ctrl_key(key: Key) -> Self {
        Self::KeyDown { key, ctrl: true }
    }

    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse { action, pos }
    }
}
