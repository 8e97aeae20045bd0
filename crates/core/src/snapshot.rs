use crate::scoring::ScoreBoard;
use crate::types::{Cell, Mark, Outcome, BOARD_CELLS};

/// Read-only, `Copy` view of a session for the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [Cell; BOARD_CELLS],
    pub current: Mark,
    pub outcome: Outcome,
    pub scores: ScoreBoard,
    pub round: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [None; BOARD_CELLS];
        self.current = Mark::X;
        self.outcome = Outcome::InProgress;
        self.scores = ScoreBoard::default();
        self.round = 1;
    }

    /// Whether a click on an empty cell would be accepted.
    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            current: Mark::X,
            outcome: Outcome::InProgress,
            scores: ScoreBoard::default(),
            round: 1,
        }
    }
}
