//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps a
//! keyboard cursor for playing cells without a mouse.

pub mod cursor;
pub mod map;

pub use tui_tictactoe_types as types;

pub use cursor::CellCursor;
pub use map::{handle_key_event, should_quit};
