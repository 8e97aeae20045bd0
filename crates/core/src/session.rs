//! Session: the one owner of the round state and the match scores.
//!
//! All mutation goes through [`Session`]. Score accrual happens inside the
//! same call as the move that ends a round, so there is never a moment where
//! the outcome is terminal but the score has not been counted yet.

use tracing::{debug, info};

use crate::game_state::{GameState, Rejection};
use crate::scoring::ScoreBoard;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Mark, Outcome};

/// Result of [`Session::play_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// `mark` was placed; `outcome` is the recomputed outcome.
    Placed { mark: Mark, outcome: Outcome },
    /// The move was ignored and nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveResult::Placed { .. })
    }
}

/// One game session: a round in play plus the running match score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: GameState,
    scores: ScoreBoard,
    /// Rounds started in the current match, 1-based.
    round: u32,
}

impl Session {
    /// Fresh session: empty board, `X` to move, zeroed scores.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            scores: ScoreBoard::new(),
            round: 1,
        }
    }

    /// Start a new round. Scores are kept.
    pub fn new_game(&mut self) {
        self.state.reset();
        self.round = self.round.saturating_add(1);
        debug!(round = self.round, "new round");
    }

    /// Zero the scores, then start a new round.
    pub fn new_match(&mut self) {
        self.scores.reset();
        self.state.reset();
        self.round = 1;
        debug!("scores reset");
    }

    /// Place the current mark at `index`.
    ///
    /// Ignored (no state change) when the round is over, the cell is taken or
    /// `index` is outside `0..9`.
    pub fn play_move(&mut self, index: usize) -> MoveResult {
        let mark = self.state.current();
        match self.state.try_place(index) {
            Ok(outcome) => {
                if outcome.is_terminal() {
                    self.scores.record(&outcome);
                    info!(
                        round = self.round,
                        outcome = outcome.as_str(),
                        winner = outcome.winner().map(|m| m.as_str()),
                        x_wins = self.scores.x_wins,
                        o_wins = self.scores.o_wins,
                        draws = self.scores.draws,
                        "round finished"
                    );
                }
                MoveResult::Placed { mark, outcome }
            }
            Err(reason) => MoveResult::Rejected(reason),
        }
    }

    /// Route an input action to the matching operation.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::PlayCell(index) => {
                self.play_move(index);
            }
            GameAction::NewRound => self.new_game(),
            GameAction::ResetScores => self.new_match(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.state.board().cells();
        out.current = self.state.current();
        out.outcome = self.state.outcome();
        out.scores = self.scores;
        out.round = self.round;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
