//! Keyboard shortcuts.
//!
//! - Ctrl+N/O/S/Z/Y/C/V: new, open, save, undo, redo, copy, paste
//! - F1: help
//! - F5: refresh view
//! - Delete: delete selection
//! - Escape: cancel current operation

use egui::{Key, Modifiers};

use crate::command::Command;

/// Resolves a key press to its command, if it is bound.
pub fn command_for_key(key: Key, modifiers: Modifiers) -> Option<Command> {
    if modifiers.ctrl || modifiers.command {
        let command = match key {
            Key::N => Some(Command::NewProject),
            Key::O => Some(Command::OpenProject),
            Key::S => Some(Command::SaveProject),
            Key::Z => Some(Command::Undo),
            Key::Y => Some(Command::Redo),
            Key::C => Some(Command::Copy),
            Key::V => Some(Command::Paste),
            _ => None,
        };
        if command.is_some() {
            return command;
        }
    }

    match key {
        Key::F1 => Some(Command::Help),
        Key::F5 => Some(Command::RefreshView),
        Key::Delete => Some(Command::DeleteSelected),
        Key::Escape => Some(Command::CancelOperation),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(command_for_key(Key::S, Modifiers::CTRL), Some(Command::SaveProject));
        assert_eq!(command_for_key(Key::Y, Modifiers::COMMAND), Some(Command::Redo));
        assert_eq!(command_for_key(Key::S, Modifiers::NONE), None);
        assert_eq!(command_for_key(Key::Q, Modifiers::CTRL), None);
    }

    #[test]
    fn test_function_keys_ignore_modifiers() {
        assert_eq!(command_for_key(Key::F1, Modifiers::NONE), Some(Command::Help));
        assert_eq!(command_for_key(Key::F5, Modifiers::CTRL), Some(Command::RefreshView));
        assert_eq!(command_for_key(Key::Escape, Modifiers::NONE), Some(Command::CancelOperation));
        assert_eq!(command_for_key(Key::Delete, Modifiers::NONE), Some(Command::DeleteSelected));
    }
}
