//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! Input is read with crossterm and applied to the session one event at a
//! time; every event is followed by a re-render from a fresh snapshot.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};

use tui_tictactoe::core::{GameSnapshot, Session};
use tui_tictactoe::input::{handle_key_event, should_quit, CellCursor};
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let view = cli.game_view();
    let mut term = TerminalRenderer::new().with_mouse_capture(!cli.no_mouse);
    info!(mouse = !cli.no_mouse, "starting");

    let result = term.enter().and_then(|()| run(&mut term, &view));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView) -> Result<()> {
    let mut session = Session::new();
    let mut cursor = CellCursor::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.index()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next input event; nothing happens in between.
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        x_wins = session.scores().x_wins,
                        o_wins = session.scores().o_wins,
                        draws = session.scores().draws,
                        "quit"
                    );
                    return Ok(());
                }
                handle_key_event(key).or_else(|| cursor.handle_key_press(key.code))
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => view.hit_test(viewport, column, row).map(GameAction::from),
            Event::Resize(..) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            debug!(action = action.as_str(), "input");
            if let GameAction::PlayCell(index) = action {
                cursor.set_index(index);
            }
            session.apply_action(action);
        }
    }
}
