//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the member crates under one path so the binary, integration
//! tests and benches can write `tui_tictactoe::{core, input, term, types}`.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
