//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Digits follow the board layout: `1 2 3` is the top row, `7 8 9` the bottom.
/// Cursor keys are handled by [`crate::CellCursor`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Direct cell selection
        KeyCode::Char(c @ '1'..='9') => Some(GameAction::PlayCell(c as usize - '1' as usize)),

        // Controls
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::ResetScores),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
