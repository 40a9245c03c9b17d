//! Host-independent input types.

use serde::{Deserialize, Serialize};

use crate::scene::Mode;

/// Pointer buttons the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Modifier key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, as typed.
    Char(char),
    Delete,
    Escape,
    Other,
}

/// User-selectable tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Draw,
    Select,
    Fill,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[Tool::Draw, Tool::Select, Tool::Fill]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Draw => "Draw",
            Tool::Select => "Select",
            Tool::Fill => "Fill",
        }
    }
}

impl From<Tool> for Mode {
    fn from(tool: Tool) -> Self {
        match tool {
            Tool::Draw => Mode::Draw,
            Tool::Select => Mode::Select,
            Tool::Fill => Mode::Fill,
        }
    }
}
