//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid stored as 9 cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! `row = index / 3`, `col = index % 3`.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{GameAction, Mark, Outcome, BOARD_CELLS, WIN_LINES};
//!
//! assert_eq!(Mark::X.other(), Mark::O);
//! assert_eq!(Mark::from_str("o"), Some(Mark::O));
//!
//! let outcome = Outcome::Win { mark: Mark::X, line: [0, 1, 2] };
//! assert!(outcome.is_terminal());
//! assert!(outcome.contains(1));
//!
//! assert_eq!(GameAction::from_str("newRound"), Some(GameAction::NewRound));
//! assert_eq!(BOARD_CELLS, 9);
//! assert_eq!(WIN_LINES.len(), 8);
//! ```

/// Board side length (3 rows, 3 columns)
pub const BOARD_SIDE: u8 = 3;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIDE * BOARD_SIDE) as usize;

/// Three board indices that form a row, column or diagonal.
pub type Triple = [u8; 3];

/// The eight winning triples, in evaluation order.
///
/// Rows first, then columns, then the two diagonals. When more than one
/// triple is mono-mark the first one in this order wins the tie-break.
pub const WIN_LINES: [Triple; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Player mark. `X` always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    ///
    /// ```
    /// use tui_tictactoe_types::Mark;
    ///
    /// assert_eq!(Mark::X.other(), Mark::O);
    /// assert_eq!(Mark::O.other(), Mark::X);
    /// ```
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parse a mark from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Mark::X),
            "o" => Some(Mark::O),
            _ => None,
        }
    }

    /// Uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Mark)`: Cell holding the mark
pub type Cell = Option<Mark>;

/// Derived status of a round.
///
/// Always computed from the board; never stored independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win { mark: Mark, line: Triple },
    Draw,
}

impl Outcome {
    /// `true` for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<Triple> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether `index` is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.winning_line()
            .is_some_and(|line| line.iter().any(|&i| i as usize == index))
    }

    /// Lowercase label, mostly for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Win { .. } => "win",
            Outcome::Draw => "draw",
        }
    }
}

/// Actions that can be applied to a game session
///
/// These are the only input events the engine understands. Both keyboard and
/// mouse input are mapped into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current mark at the given board index.
    ///
    /// Forwarded verbatim; out-of-range indices are ignored by the engine.
    PlayCell(usize),
    /// Start a new round, keeping the scores.
    NewRound,
    /// Zero the scores and start a new round.
    ResetScores,
}

impl GameAction {
    /// Parse a non-cell action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("NEWROUND"), Some(GameAction::NewRound));
    /// assert_eq!(GameAction::from_str("resetScores"), Some(GameAction::ResetScores));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newround" => Some(GameAction::NewRound),
            "resetscores" => Some(GameAction::ResetScores),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::PlayCell(_) => "playCell",
            GameAction::NewRound => "newRound",
            GameAction::ResetScores => "resetScores",
        }
    }
}
