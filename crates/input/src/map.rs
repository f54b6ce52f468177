//! Key mapping from terminal events to menu inputs.

use crate::types::MenuInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu inputs.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuInput> {
    match key.code {
        // Mode triggers
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuInput::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(MenuInput::Pause),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(MenuInput::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(MenuInput::Down)
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuInput::Confirm),
        KeyCode::Esc | KeyCode::Backspace => Some(MenuInput::Cancel),

        _ => None,
    }
}

/// Check if the key is a terminal interrupt (Ctrl+C).
///
/// Hosts treat this as an unconditional abort, outside any mode's control.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
