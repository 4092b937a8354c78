//! Integration tests for the session controller.

use noughts_rules::{GameStatus, Mark, Outcome, Position};
use noughts_session::{DEFAULT_HISTORY_CAPACITY, Session, SessionError};

const X_WINS_TOP_ROW: [usize; 5] = [0, 3, 1, 4, 2];
const O_WINS_CENTER_COLUMN: [usize; 6] = [0, 1, 2, 4, 8, 7];
const DRAW: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

fn play_all(session: &mut Session, moves: &[usize]) -> Outcome {
    let mut outcome = session.outcome();
    for &index in moves {
        outcome = session.play(index).expect("move should be accepted");
    }
    outcome
}

#[test]
fn test_win_is_scored_once() {
    let mut session = Session::new();
    let outcome = play_all(&mut session, &X_WINS_TOP_ROW);

    assert_eq!(outcome, Outcome::won(Mark::X));
    assert_eq!(session.winning_cells(), Some([0, 1, 2]));
    assert_eq!(session.score().wins(Mark::X), 1);

    // Rejected follow-up moves must not score again.
    assert_eq!(session.play(5), Err(SessionError::GameOver));
    assert_eq!(session.play(0), Err(SessionError::GameOver));
    assert_eq!(session.score().games(), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_o_win_and_draw_scored() {
    let mut session = Session::new();
    assert_eq!(play_all(&mut session, &O_WINS_CENTER_COLUMN), Outcome::won(Mark::O));
    assert_eq!(session.winning_cells(), Some([1, 4, 7]));

    session.new_game();
    let outcome = play_all(&mut session, &DRAW);
    assert_eq!(outcome.status(), GameStatus::Draw);
    assert_eq!(session.winning_cells(), None);

    assert_eq!(session.score().wins(Mark::O), 1);
    assert_eq!(session.score().wins(Mark::X), 0);
    assert_eq!(session.score().draws(), 1);
}

#[test]
fn test_history_newest_first_and_capped() {
    let mut session = Session::new();
    for game in 0..(DEFAULT_HISTORY_CAPACITY + 2) {
        let moves: &[usize] = if game % 2 == 0 { &X_WINS_TOP_ROW } else { &DRAW };
        play_all(&mut session, moves);
        session.new_game();
    }

    let history = session.history();
    assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);

    let ids: Vec<u64> = history.iter().map(|e| *e.id()).collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);

    let latest = history.latest().unwrap();
    assert_eq!(*latest.outcome(), Outcome::won(Mark::X));
    let stamps: Vec<_> = history.iter().map(|e| *e.finished_at()).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));

    // Score still counts every game, not just the logged ones.
    assert_eq!(session.score().games(), 7);
}

#[test]
fn test_custom_history_capacity() {
    let mut session = Session::with_history_capacity(2);
    for _ in 0..3 {
        play_all(&mut session, &DRAW);
        session.new_game();
    }
    assert_eq!(session.history().capacity(), 2);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_new_game_keeps_score_and_history() {
    let mut session = Session::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.new_game();

    assert_eq!(session.outcome(), Outcome::playing());
    assert_eq!(session.to_move(), Mark::X);
    assert!(session.board().cells().iter().all(Option::is_none));
    assert_eq!(session.score().wins(Mark::X), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_new_game_mid_game_does_not_score() {
    let mut session = Session::new();
    play_all(&mut session, &[0, 4]);
    session.new_game();
    assert_eq!(session.score().games(), 0);
    assert!(session.history().is_empty());
    assert_eq!(session.to_move(), Mark::X);
}

#[test]
fn test_reset_all_clears_everything() {
    let mut session = Session::new();
    play_all(&mut session, &X_WINS_TOP_ROW);
    session.reset_all();

    assert_eq!(session.score().games(), 0);
    assert!(session.history().is_empty());
    assert_eq!(session.outcome(), Outcome::playing());

    // Numbering restarts after a reset.
    play_all(&mut session, &DRAW);
    assert_eq!(session.history().latest().map(|e| *e.id()), Some(1));
}

#[test]
fn test_play_position() {
    let mut session = Session::new();
    session.play_position(Position::Center).unwrap();
    assert_eq!(session.board()[4], Some(Mark::X));
    assert!(session.play_position(Position::Center).is_err());
    assert_eq!(session.to_move(), Mark::O);
}

#[test]
fn test_previous_snapshots_are_not_aliased() {
    let mut session = Session::new();
    session.play(0).unwrap();
    let snapshot = *session.board();
    session.play(8).unwrap();

    assert_eq!(snapshot[8], None);
    assert_eq!(session.board()[8], Some(Mark::O));
}

#[test]
fn test_error_display() {
    assert_eq!(SessionError::GameOver.to_string(), "Game is already over");
    let mut session = Session::new();
    session.play(2).unwrap();
    let err = session.play(2).unwrap_err();
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_very_large_history_capacity() {
    let mut session = Session::with_history_capacity(usize::MAX / 2);
    for _ in 0..3 {
        play_all(&mut session, &DRAW);
        session.new_game();
    }
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().capacity(), usize::MAX / 2);
}
