//! View projection: `GameSnapshot` -> `RenderModel`.
//!
//! Pure and allocation-free. Everything the renderer needs to know about
//! which cell is highlighted, which is clickable and which banner is shown is
//! decided here, so the drawing code never inspects game rules.

use crate::core::{GameSnapshot, ScoreBoard};
use crate::types::{Mark, Outcome, BOARD_CELLS};

/// Visual state of one board cell.
///
/// `Highlighted` and `Filled` never apply to the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVisual {
    /// Empty cell.
    Empty,
    /// Occupied, not part of a winning line.
    Filled,
    /// On the winning line; keyed by the winning mark.
    Highlighted(Mark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub mark: Option<Mark>,
    pub visual: CellVisual,
    /// Clicking the cell would place a mark.
    pub interactive: bool,
}

/// The single status line above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBanner {
    Win(Mark),
    Draw,
    Turn(Mark),
}

impl StatusBanner {
    pub fn from_outcome(outcome: &Outcome, current: Mark) -> Self {
        match outcome {
            Outcome::Win { mark, .. } => StatusBanner::Win(*mark),
            Outcome::Draw => StatusBanner::Draw,
            Outcome::InProgress => StatusBanner::Turn(current),
        }
    }

    pub fn show_win_banner(&self) -> bool {
        matches!(self, StatusBanner::Win(_))
    }

    pub fn show_draw_banner(&self) -> bool {
        matches!(self, StatusBanner::Draw)
    }

    pub fn show_turn_indicator(&self) -> bool {
        matches!(self, StatusBanner::Turn(_))
    }

    /// Main banner text.
    pub fn headline(&self) -> &'static str {
        match self {
            StatusBanner::Win(Mark::X) => "Player X Wins!",
            StatusBanner::Win(Mark::O) => "Player O Wins!",
            StatusBanner::Draw => "It's a Draw!",
            StatusBanner::Turn(_) => "Current turn:",
        }
    }

    /// Second line under the headline, if any.
    pub fn subline(&self) -> Option<&'static str> {
        match self {
            StatusBanner::Win(_) => Some("Well Played!"),
            StatusBanner::Draw => Some("Try again"),
            StatusBanner::Turn(_) => None,
        }
    }
}

/// Everything drawn for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderModel {
    pub cells: [CellView; BOARD_CELLS],
    pub status: StatusBanner,
    pub scores: ScoreBoard,
    /// Keyboard cursor; hidden once the round is over.
    pub cursor: Option<usize>,
}

/// Project a snapshot (and the keyboard cursor) into a render model.
pub fn project(snap: &GameSnapshot, cursor: Option<usize>) -> RenderModel {
    let playable = snap.playable();
    let mut cells = [CellView {
        mark: None,
        visual: CellVisual::Empty,
        interactive: false,
    }; BOARD_CELLS];

    for (i, view) in cells.iter_mut().enumerate() {
        let mark = snap.board[i];
        let visual = match (snap.outcome, mark) {
            (Outcome::Win { mark: winner, .. }, Some(_)) if snap.outcome.contains(i) => {
                CellVisual::Highlighted(winner)
            }
            (_, Some(_)) => CellVisual::Filled,
            (_, None) => CellVisual::Empty,
        };
        *view = CellView {
            mark,
            visual,
            interactive: playable && mark.is_none(),
        };
    }

    RenderModel {
        cells,
        status: StatusBanner::from_outcome(&snap.outcome, snap.current),
        scores: snap.scores,
        cursor: cursor.filter(|&c| playable && c < BOARD_CELLS),
    }
}
