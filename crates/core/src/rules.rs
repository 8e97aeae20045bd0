//! Outcome derivation.
//!
//! The outcome of a round is a pure function of the board. It is recomputed
//! after every placement instead of being tracked incrementally.

use crate::board::Board;
use crate::types::{Outcome, Triple, WIN_LINES};

/// Derive the outcome of `board`.
///
/// Checks the eight fixed triples in [`WIN_LINES`] order; the first mono-mark
/// triple wins. With no winner, a full board is a draw.
///
/// ```
/// use tui_tictactoe_core::{rules, Board};
/// use tui_tictactoe_core::types::{Mark, Outcome};
///
/// let mut board = Board::new();
/// for i in [0, 4, 8] {
///     board.place(i, Mark::O);
/// }
/// assert_eq!(
///     rules::evaluate(&board),
///     Outcome::Win { mark: Mark::O, line: [0, 4, 8] }
/// );
/// ```
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        if let Some(Some(mark)) = board.get(line[0] as usize) {
            return Outcome::Win { mark, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// First triple whose three cells hold the same mark.
pub fn winning_line(board: &Board) -> Option<Triple> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        let first = board.get(a as usize).flatten();
        first.is_some()
            && first == board.get(b as usize).flatten()
            && first == board.get(c as usize).flatten()
    })
}

/// Full board with no winning triple.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
