//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use tui_tictactoe::term::{AnchorY, GameView};

/// Two-player Tic-Tac-Toe in the terminal, with scores kept for the session.
#[derive(Parser, Debug)]
#[command(name = "tui-tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Board cell width in terminal columns (values below 3 are raised to 3)
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..=40))]
    pub cell_width: u16,

    /// Board cell height in terminal rows
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=20))]
    pub cell_height: u16,

    /// Vertical placement of the board
    #[arg(long, value_enum, default_value_t = Anchor::Center)]
    pub anchor: Anchor,

    /// Do not capture the mouse (keyboard only)
    #[arg(long)]
    pub no_mouse: bool,

    /// Write diagnostics to this file. Verbosity follows RUST_LOG.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Anchor {
    Center,
    Top,
}

impl From<Anchor> for AnchorY {
    fn from(value: Anchor) -> Self {
        match value {
            Anchor::Center => AnchorY::Center,
            Anchor::Top => AnchorY::Top,
        }
    }
}

impl Cli {
    pub fn game_view(&self) -> GameView {
        GameView::new(self.cell_width, self.cell_height).with_anchor_y(self.anchor.into())
    }
}
