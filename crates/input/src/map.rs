//! Key mapping from terminal events to movement intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_maze_types::MoveIntent;

/// Map keyboard input to a movement intent.
pub fn map_key(key: KeyEvent) -> Option<MoveIntent> {
    match key.code {
        // Turning
        KeyCode::Left => Some(MoveIntent::RotateLeft),
        KeyCode::Right => Some(MoveIntent::RotateRight),

        // Walking
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MoveIntent::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MoveIntent::Backward),

        // Strafing
        KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveIntent::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveIntent::StrafeRight),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
