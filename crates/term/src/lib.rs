//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget toolkits and
//! renders into a plain framebuffer that is diffed and flushed to the terminal.
//!
//! Data flows one way:
//! `Session` -> `GameSnapshot` -> [`projection::project`] -> [`RenderModel`]
//! -> [`GameView`] -> [`FrameBuffer`] -> [`TerminalRenderer`].
//!
//! The engine knows nothing about this crate.

pub mod fb;
pub mod game_view;
pub mod projection;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{AnchorY, GameView, HitTarget, Layout, Viewport};
pub use projection::{project, CellView, CellVisual, RenderModel, StatusBanner};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
