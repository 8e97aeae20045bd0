//! Single-round game state: board, side to move, derived outcome.

use tracing::debug;

use crate::board::Board;
use crate::rules;
use crate::types::{Mark, Outcome};

/// Why a placement was ignored.
///
/// Rejections are not errors: the state is left untouched and the caller is
/// free to drop the value. It exists for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The round already has a winner or is drawn.
    GameOver,
    /// The target cell already holds a mark.
    Occupied,
    /// The index is not in `0..9`.
    OutOfRange,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::GameOver => "game_over",
            Rejection::Occupied => "occupied",
            Rejection::OutOfRange => "out_of_range",
        }
    }
}

/// State of one round.
///
/// `outcome` is never assigned directly: every placement recomputes it from
/// the board via [`rules::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Mark,
    outcome: Outcome,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Empty board, `X` to move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Mark::X;
        self.outcome = rules::evaluate(&self.board);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that will be placed by the next valid move.
    pub fn current(&self) -> Mark {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Check whether a placement at `index` would be accepted.
    pub fn validate(&self, index: usize) -> Result<(), Rejection> {
        if self.outcome.is_terminal() {
            return Err(Rejection::GameOver);
        }
        match self.board.get(index) {
            None => Err(Rejection::OutOfRange),
            Some(Some(_)) => Err(Rejection::Occupied),
            Some(None) => Ok(()),
        }
    }

    /// Place the current mark at `index` and return the new outcome.
    ///
    /// The side to move only flips while the round stays in progress, so on
    /// a terminal outcome `current()` still names the mark that ended it.
    pub fn try_place(&mut self, index: usize) -> Result<Outcome, Rejection> {
        if let Err(reason) = self.validate(index) {
            debug!(index, reason = reason.as_str(), "move rejected");
            return Err(reason);
        }

        self.board.place(index, self.current);
        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.current = self.current.other();
        }
        Ok(self.outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_x() {
        let state = GameState::new();
        assert_eq!(state.current(), Mark::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.try_place(0), Ok(Outcome::InProgress));
        assert_eq!(state.current(), Mark::O);
        assert_eq!(state.try_place(1), Ok(Outcome::InProgress));
        assert_eq!(state.current(), Mark::X);
        assert_eq!(state.board().get(0), Some(Some(Mark::X)));
        assert_eq!(state.board().get(1), Some(Some(Mark::O)));
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut state = GameState::new();
        state.try_place(4).unwrap();
        let before = state.clone();

        assert_eq!(state.try_place(4), Err(Rejection::Occupied));
        assert_eq!(state.try_place(9), Err(Rejection::OutOfRange));
        assert_eq!(state.try_place(usize::MAX), Err(Rejection::OutOfRange));
        assert_eq!(state, before);
    }

    #[test]
    fn terminal_state_rejects_everything() {
        let mut state = GameState::new();
        for i in [0, 3, 1, 4, 2] {
            state.try_place(i).unwrap();
        }
        assert!(state.is_over());
        assert_eq!(state.current(), Mark::X);

        let before = state.clone();
        for i in 0..9 {
            assert_eq!(state.try_place(i), Err(Rejection::GameOver));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn reset_restores_fresh_round() {
        let mut state = GameState::new();
        for i in [0, 3, 1, 4, 2] {
            state.try_place(i).unwrap();
        }
        state.reset();
        assert_eq!(state, GameState::new());
    }
}
