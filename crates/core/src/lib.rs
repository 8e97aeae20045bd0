//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and score keeping.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the same sequence of actions always yields the same state
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: can drive a terminal, a GUI or a headless test harness
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid with placement and occupancy queries
//! - [`rules`]: outcome derivation (win lines, draw)
//! - [`game_state`]: one round: board, side to move, derived outcome
//! - [`scoring`]: per-match win/draw counters
//! - [`session`]: owner of the round and the scores; the only mutation entry point
//! - [`snapshot`]: `Copy` view handed to the renderer
//!
//! # Game Rules
//!
//! - `X` opens every round; marks alternate after each accepted move.
//! - A move is ignored when the round is over, the cell is taken or the index
//!   is off the board.
//! - After each placement the outcome is recomputed from the board: the first
//!   of the eight lines holding three equal marks wins, otherwise a full board
//!   is a draw.
//! - The score is updated in the same call as the move that ends the round.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::Session;
//! use tui_tictactoe_types::{GameAction, Mark, Outcome};
//!
//! let mut session = Session::new();
//! for index in [0, 4, 1, 5, 2] {
//!     session.apply_action(GameAction::PlayCell(index));
//! }
//!
//! assert_eq!(
//!     session.state().outcome(),
//!     Outcome::Win { mark: Mark::X, line: [0, 1, 2] }
//! );
//! assert_eq!(session.scores().x_wins, 1);
//!
//! session.apply_action(GameAction::NewRound);
//! assert_eq!(session.state().current(), Mark::X);
//! assert_eq!(session.scores().x_wins, 1);
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Rejection};
pub use scoring::ScoreBoard;
pub use session::{MoveResult, Session};
pub use snapshot::GameSnapshot;
