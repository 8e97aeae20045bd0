use tui_tictactoe::core::{GameSnapshot, Session};
use tui_tictactoe::term::{
    project, AnchorY, CellStyle, CellVisual, GameView, HitTarget, Rgb, StatusBanner, Viewport,
};
use tui_tictactoe::types::Mark;

fn session_after(moves: &[usize]) -> Session {
    let mut session = Session::new();
    for &m in moves {
        session.play_move(m);
    }
    session
}

fn cell_style(view: &GameView, vp: Viewport, snap: &GameSnapshot, index: usize) -> CellStyle {
    let fb = view.render(snap, None, vp);
    let r = view.layout(vp).cell_rect(index);
    fb.get(r.x, r.y).unwrap().style
}

#[test]
fn banner_flags_partition_outcomes() {
    let cases = [
        session_after(&[]),
        session_after(&[0, 4]),
        session_after(&[0, 4, 1, 5, 2]),
        session_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]),
    ];
    for session in cases {
        let status = project(&session.snapshot(), None).status;
        let shown = [
            status.show_win_banner(),
            status.show_draw_banner(),
            status.show_turn_indicator(),
        ];
        assert_eq!(shown.iter().filter(|&&b| b).count(), 1, "{status:?}");
    }
}

#[test]
fn highlighted_and_filled_are_exclusive_and_interactivity_tracks_state() {
    for moves in [
        &[][..],
        &[4, 0, 8][..],
        &[0, 4, 1, 5, 2][..],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8][..],
    ] {
        let snap = session_after(moves).snapshot();
        let model = project(&snap, None);
        for (i, cell) in model.cells.iter().enumerate() {
            let on_line = snap.outcome.contains(i);
            match cell.visual {
                CellVisual::Highlighted(m) => {
                    assert!(on_line);
                    assert_eq!(snap.outcome.winner(), Some(m));
                }
                CellVisual::Filled => {
                    assert!(!on_line);
                    assert!(snap.board[i].is_some());
                }
                CellVisual::Empty => assert!(snap.board[i].is_none()),
            }
            assert_eq!(
                cell.interactive,
                !snap.outcome.is_terminal() && snap.board[i].is_none()
            );
        }
    }
}

#[test]
fn view_renders_title_scores_controls_and_footer() {
    let session = session_after(&[]);
    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Some(4), Viewport::new(80, 30));
    let all = fb.text();

    assert!(all.contains("Tic Tac Toe"));
    assert!(all.contains("Draws"));
    assert!(all.contains("Wins"));
    assert!(all.contains("Current turn:"));
    assert!(all.contains("[ New Round ]"));
    assert!(all.contains("[ Reset Scores ]"));
    assert!(all.contains("Game state persists during session"));
}

#[test]
fn view_shows_win_and_draw_banners() {
    let view = GameView::default();
    let vp = Viewport::new(80, 30);

    let won = view.render(&session_after(&[0, 4, 1, 5, 2]).snapshot(), None, vp);
    assert!(won.text().contains("Player X Wins!"));
    assert!(won.text().contains("Well Played!"));
    assert!(!won.text().contains("Current turn:"));

    let drawn = view.render(
        &session_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).snapshot(),
        None,
        vp,
    );
    assert!(drawn.text().contains("It's a Draw!"));
    assert!(drawn.text().contains("Try again"));
}

#[test]
fn score_counters_are_rendered() {
    let mut session = Session::new();
    for _ in 0..12 {
        for m in [0, 4, 1, 5, 2] {
            session.play_move(m);
        }
        session.new_game();
    }
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let fb = view.render(&session.snapshot(), None, vp);
    let scores_row = fb.row_text(view.layout(vp).scores_y + 1);
    assert!(scores_row.contains("12"), "{scores_row:?}");
    assert_eq!(scores_row.matches('0').count(), 2, "{scores_row:?}");
}

#[test]
fn winning_cells_use_distinct_styles_per_mark() {
    let view = GameView::default();
    let vp = Viewport::new(80, 30);

    let x_win = session_after(&[0, 4, 1, 5, 2]).snapshot();
    let o_win = session_after(&[0, 1, 2, 4, 3, 7]).snapshot();

    let x_line = cell_style(&view, vp, &x_win, 0);
    let x_other = cell_style(&view, vp, &x_win, 4);
    let o_line = cell_style(&view, vp, &o_win, 4);

    assert_ne!(x_line.bg, x_other.bg);
    assert_ne!(x_line.bg, o_line.bg);
    assert_ne!(o_line.bg, Rgb::new(0, 0, 0));
}

#[test]
fn cursor_outline_does_not_change_cell_fill() {
    let session = session_after(&[4]);
    let snap = session.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let layout = view.layout(vp);
    let r = layout.cell_rect(4);

    let with_cursor = view.render(&snap, Some(4), vp);
    let without = view.render(&snap, None, vp);
    assert_eq!(with_cursor.get(r.x, r.y), without.get(r.x, r.y));
    assert_ne!(
        with_cursor.get(r.x - 1, r.y - 1),
        without.get(r.x - 1, r.y - 1)
    );
}

#[test]
fn anchor_top_starts_at_first_row() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(80, 60);
    let fb = view.render(&Session::new().snapshot(), None, vp);
    assert!(fb.row_text(0).contains("Tic Tac Toe"));

    let centered = GameView::default().layout(vp);
    assert!(centered.title_y > 0);
}

#[test]
fn tiny_viewport_does_not_panic() {
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (30, 12)] {
        let fb = view.render(&Session::new().snapshot(), Some(0), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn clicking_cells_plays_through_hit_test() {
    let view = GameView::new(5, 1);
    let vp = Viewport::new(60, 30);
    let layout = view.layout(vp);
    let mut session = Session::new();

    for index in [0, 4, 1, 5, 2] {
        let r = layout.cell_rect(index);
        let target = view.hit_test(vp, r.x, r.y).unwrap();
        assert_eq!(target, HitTarget::Cell(index));
        session.apply_action(target.into());
    }
    assert_eq!(session.state().outcome().winner(), Some(Mark::X));

    let nr = layout.new_round;
    session.apply_action(view.hit_test(vp, nr.x + 1, nr.y).unwrap().into());
    assert_eq!(session.state().board().filled_count(), 0);
    assert_eq!(session.scores().x_wins, 1);

    let rs = layout.reset_scores;
    session.apply_action(view.hit_test(vp, rs.x + rs.w - 1, rs.y).unwrap().into());
    assert_eq!(session.scores().total(), 0);
}

#[test]
fn projection_of_terminal_state_hides_cursor() {
    let snap = session_after(&[0, 4, 1, 5, 2]).snapshot();
    assert_eq!(project(&snap, Some(3)).cursor, None);
    assert_eq!(project(&snap, Some(3)).status, StatusBanner::Win(Mark::X));
}
