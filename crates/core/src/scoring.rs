//! Scoring module - per-match win/draw counters

use crate::types::{Mark, Outcome};

/// Session-scoped tally of finished rounds.
///
/// Counters only go up within a match; [`ScoreBoard::reset`] is the only way
/// back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a terminal outcome. `InProgress` is ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x_wins = self.x_wins.saturating_add(1),
            Outcome::Win { mark: Mark::O, .. } => self.o_wins = self.o_wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::InProgress => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Number of finished rounds in this match
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
