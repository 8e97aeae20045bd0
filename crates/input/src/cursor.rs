//! Keyboard cell cursor.
//!
//! Lets a player walk the grid with arrow keys (or `hjkl`) and play the
//! selected cell with Enter or Space.

use crossterm::event::KeyCode;

use crate::types::{GameAction, BOARD_SIDE};

/// Selected cell, kept inside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCursor {
    row: u8,
    col: u8,
}

impl CellCursor {
    /// Cursor on the center cell.
    pub fn new() -> Self {
        Self { row: 1, col: 1 }
    }

    /// Board index under the cursor.
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIDE as usize + self.col as usize
    }

    /// Move the cursor onto `index`. Out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) {
        let side = BOARD_SIDE as usize;
        if index < side * side {
            self.row = (index / side) as u8;
            self.col = (index % side) as u8;
        }
    }

    /// Handle a key press.
    ///
    /// Movement keys only update the cursor and return `None`; Enter and
    /// Space return a play action for the selected cell.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let last = BOARD_SIDE - 1;
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
                self.col = self.col.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
                self.col = (self.col + 1).min(last);
                None
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
                self.row = self.row.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
                self.row = (self.row + 1).min(last);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::PlayCell(self.index())),
            _ => None,
        }
    }
}

impl Default for CellCursor {
    fn default() -> Self {
        Self::new()
    }
}
