//! Customizable tool shortcuts.
//!
//! Keys are single characters matched exactly as typed, and only fire
//! with no modifier held.

use serde::{Deserialize, Serialize};

use crate::input::{Key, Modifiers, Tool};

/// Keybinding configuration for the tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Hotkey for the draw tool
    #[serde(default = "default_draw_key")]
    pub tool_draw: char,
    /// Hotkey for the select tool
    #[serde(default = "default_select_key")]
    pub tool_select: char,
    /// Hotkey for the fill tool
    #[serde(default = "default_fill_key")]
    pub tool_fill: char,
}

fn default_draw_key() -> char {
    'd'
}

fn default_select_key() -> char {
    's'
}

fn default_fill_key() -> char {
    'f'
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tool_draw: default_draw_key(),
            tool_select: default_select_key(),
            tool_fill: default_fill_key(),
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the tool that corresponds to a key press, if any.
    pub fn tool_for_key(&self, key: Key, modifiers: Modifiers) -> Option<Tool> {
        let Key::Char(c) = key else {
            return None;
        };
        if modifiers.any() {
            return None;
        }
        Tool::all()
            .iter()
            .copied()
            .find(|tool| self.key_for_tool(*tool) == c)
    }

    pub fn key_for_tool(&self, tool: Tool) -> char {
        match tool {
            Tool::Draw => self.tool_draw,
            Tool::Select => self.tool_select,
            Tool::Fill => self.tool_fill,
        }
    }

    pub fn set_tool_key(&mut self, tool: Tool, key: char) {
        match tool {
            Tool::Draw => self.tool_draw = key,
            Tool::Select => self.tool_select = key,
            Tool::Fill => self.tool_fill = key,
        }
    }

    /// Check if a key is already bound to a tool other than `exclude`.
    /// Returns a description of the conflicting binding.
    pub fn key_conflict(&self, key: char, exclude: Option<Tool>) -> Option<String> {
        let key = key.to_ascii_lowercase();
        Tool::all()
            .iter()
            .filter(|tool| Some(**tool) != exclude)
            .find(|tool| self.key_for_tool(**tool).to_ascii_lowercase() == key)
            .map(|tool| format!("{} tool", tool.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_keys() {
        let kb = KeyBindings::new();
        assert_eq!(kb.tool_for_key(Key::Char('d'), Modifiers::NONE), Some(Tool::Draw));
        assert_eq!(kb.tool_for_key(Key::Char('s'), Modifiers::NONE), Some(Tool::Select));
        assert_eq!(kb.tool_for_key(Key::Char('f'), Modifiers::NONE), Some(Tool::Fill));
        assert_eq!(kb.tool_for_key(Key::Char('x'), Modifiers::NONE), None);
        assert_eq!(kb.tool_for_key(Key::Escape, Modifiers::NONE), None);
    }

    #[test]
    fn test_command_modifier_suppresses_tools() {
        let kb = KeyBindings::new();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(kb.tool_for_key(Key::Char('s'), ctrl), None);
        assert_eq!(kb.tool_for_key(Key::Char('d'), meta), None);
    }

    #[test]
    fn test_shift_and_uppercase_do_not_switch_tools() {
        let kb = KeyBindings::new();
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        assert_eq!(kb.tool_for_key(Key::Char('D'), Modifiers::SHIFT), None);
        assert_eq!(kb.tool_for_key(Key::Char('d'), Modifiers::SHIFT), None);
        assert_eq!(kb.tool_for_key(Key::Char('F'), Modifiers::NONE), None);
        assert_eq!(kb.tool_for_key(Key::Char('f'), alt), None);
    }

    #[test]
    fn test_rebind_and_conflict() {
        let mut kb = KeyBindings::new();
        assert_eq!(kb.key_conflict('s', Some(Tool::Draw)), Some("Select tool".to_string()));
        assert_eq!(kb.key_conflict('s', Some(Tool::Select)), None);

        kb.set_tool_key(Tool::Draw, 'p');
        assert_eq!(kb.tool_for_key(Key::Char('p'), Modifiers::NONE), Some(Tool::Draw));
        assert_eq!(kb.tool_for_key(Key::Char('d'), Modifiers::NONE), None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let kb: KeyBindings = serde_json::from_str(r#"{"tool_fill":"g"}"#).unwrap();
        assert_eq!(kb.tool_draw, 'd');
        assert_eq!(kb.tool_fill, 'g');
    }
}
