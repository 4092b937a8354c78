//! Tests for scripted replay.

use noughts::{AppConfig, ReplayError, replay};
use noughts_rules::{GameStatus, Mark, MoveError, Outcome};
use noughts_session::SessionError;

#[test]
fn test_replay_draw() {
    let mut out = Vec::new();
    let moves = ["0", "1", "2", "4", "3", "5", "7", "6", "8"];
    let outcome = replay(&moves, &AppConfig::default(), &mut out).unwrap();

    assert_eq!(outcome.status(), GameStatus::Draw);
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("Draw\n"));
}

#[test]
fn test_replay_win_with_names() {
    let mut out = Vec::new();
    let moves = ["top-left", "middle-left", "top-center", "center", "top-right"];
    let outcome = replay(&moves, &AppConfig::default(), &mut out).unwrap();

    assert_eq!(outcome, Outcome::won(Mark::X));
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[X]|[X]|[X]"));
}

#[test]
fn test_replay_stops_on_occupied_cell() {
    let mut out = Vec::new();
    let err = replay(&["4", "4"], &AppConfig::default(), &mut out).unwrap_err();
    assert!(matches!(
        err,
        ReplayError::Rejected {
            step: 2,
            source: SessionError::Move(MoveError::IllegalMove { index: 4, .. })
        }
    ));
    assert!(out.is_empty());
}

#[test]
fn test_replay_stops_after_game_over() {
    let mut out = Vec::new();
    let err = replay(&["0", "3", "1", "4", "2", "5"], &AppConfig::default(), &mut out).unwrap_err();
    assert!(matches!(
        err,
        ReplayError::Rejected {
            step: 6,
            source: SessionError::GameOver
        }
    ));
}

#[test]
fn test_replay_unknown_cell() {
    let mut out = Vec::new();
    let err = replay(&["4", "middle"], &AppConfig::default(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "Move 2: 'middle' is not a cell");
}
