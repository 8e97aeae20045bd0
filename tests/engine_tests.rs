//! Engine behaviour through the facade crate: scenarios and whole-game-tree
//! invariants.

use tui_tictactoe::core::{rules, GameState, MoveResult, Rejection, ScoreBoard, Session};
use tui_tictactoe::types::{Mark, Outcome, BOARD_CELLS, WIN_LINES};

fn play(session: &mut Session, moves: &[usize]) {
    for &m in moves {
        assert!(session.play_move(m).is_placed(), "move {m} was rejected");
    }
}

#[test]
fn top_row_win_for_x() {
    let mut session = Session::new();
    play(&mut session, &[0, 4, 1, 5, 2]);

    assert_eq!(
        session.state().outcome(),
        Outcome::Win {
            mark: Mark::X,
            line: [0, 1, 2]
        }
    );
    assert_eq!(
        session.scores(),
        ScoreBoard {
            x_wins: 1,
            o_wins: 0,
            draws: 0
        }
    );
}

#[test]
fn full_board_draw() {
    let mut session = Session::new();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.state().outcome(), Outcome::Draw);
    assert!(session.state().board().is_full());
    assert_eq!(session.scores().draws, 1);
    assert_eq!(session.scores().total(), 1);
}

#[test]
fn occupied_cell_is_rejected_and_turn_kept() {
    let mut session = Session::new();
    play(&mut session, &[0]);
    let board_before = *session.state().board();

    assert_eq!(
        session.play_move(0),
        MoveResult::Rejected(Rejection::Occupied)
    );
    assert_eq!(*session.state().board(), board_before);
    assert_eq!(session.state().current(), Mark::O);
}

#[test]
fn out_of_range_is_ignored() {
    let mut session = Session::new();
    let before = session.clone();
    for index in [9, 10, 100, usize::MAX] {
        assert_eq!(
            session.play_move(index),
            MoveResult::Rejected(Rejection::OutOfRange)
        );
    }
    assert_eq!(session, before);
}

#[test]
fn o_can_win_and_scores_accumulate_across_rounds() {
    let mut session = Session::new();

    // Round 1: X wins on the anti-diagonal.
    play(&mut session, &[2, 0, 4, 1, 6]);
    assert_eq!(session.state().outcome().winner(), Some(Mark::X));

    // Round 2: O wins on the middle column.
    session.new_game();
    play(&mut session, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(
        session.state().outcome(),
        Outcome::Win {
            mark: Mark::O,
            line: [1, 4, 7]
        }
    );

    // Round 3: draw.
    session.new_game();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(
        session.scores(),
        ScoreBoard {
            x_wins: 1,
            o_wins: 1,
            draws: 1
        }
    );
    assert_eq!(session.round(), 3);
}

#[test]
fn new_game_resets_round_but_not_scores() {
    let mut session = Session::new();
    play(&mut session, &[0, 4, 1, 5, 2]);
    let scores = session.scores();

    session.new_game();
    let state = session.state();
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.current(), Mark::X);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(session.scores(), scores);
}

#[test]
fn new_game_mid_round_discards_board_without_scoring() {
    let mut session = Session::new();
    play(&mut session, &[0, 4, 1]);
    session.new_game();
    assert_eq!(session.scores().total(), 0);
    assert_eq!(session.state().current(), Mark::X);
}

#[test]
fn new_match_zeroes_scores_and_resets_round() {
    let mut session = Session::new();
    play(&mut session, &[0, 4, 1, 5, 2]);
    session.new_game();
    play(&mut session, &[4]);

    session.new_match();
    assert_eq!(session.scores(), ScoreBoard::default());
    assert_eq!(session.state(), &GameState::new());
}

/// Walk every legal game from the empty board and check the engine
/// invariants at every node.
#[test]
fn invariants_hold_over_entire_game_tree() {
    fn walk(session: &Session, depth: usize, terminal_games: &mut u32) {
        let state = session.state();
        let board = state.board();
        let outcome = state.outcome();

        // Outcome is always the pure derivation of the board.
        assert_eq!(outcome, rules::evaluate(board));

        // Alternation: X moves on even depths, O on odd, until terminal.
        let expected = if depth % 2 == 0 { Mark::X } else { Mark::O };
        if !outcome.is_terminal() {
            assert_eq!(state.current(), expected);
        }

        match outcome {
            Outcome::Win { mark, line } => {
                assert!(line.iter().all(|&i| board.get(i as usize) == Some(Some(mark))));
                assert!(WIN_LINES.contains(&line));
                // The mark that just moved is the winner.
                assert_eq!(mark, if depth % 2 == 1 { Mark::X } else { Mark::O });
            }
            Outcome::Draw => {
                assert!(board.is_full());
                assert!(rules::winning_line(board).is_none());
            }
            Outcome::InProgress => {
                assert!(!board.is_full());
                assert!(rules::winning_line(board).is_none());
            }
        }

        // Score is counted exactly once, at the terminal move.
        let expected_total = if outcome.is_terminal() { 1 } else { 0 };
        assert_eq!(session.scores().total(), expected_total);

        if outcome.is_terminal() {
            *terminal_games += 1;
            // Idempotence: nothing changes after the round is over.
            let mut probe = session.clone();
            for i in 0..BOARD_CELLS {
                assert_eq!(probe.play_move(i), MoveResult::Rejected(Rejection::GameOver));
            }
            assert_eq!(&probe, session);
            return;
        }

        for i in board.empty_cells() {
            let mut next = session.clone();
            assert!(next.play_move(i as usize).is_placed());
            walk(&next, depth + 1, terminal_games);
        }
    }

    let mut terminal_games = 0;
    walk(&Session::new(), 0, &mut terminal_games);
    // Known count of distinct complete tic-tac-toe games.
    assert_eq!(terminal_games, 255_168);
}
