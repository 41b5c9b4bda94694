//! Key mapping from terminal events to game commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Direction> {
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Direction::Rotate),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Direction::Drop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
