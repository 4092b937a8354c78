//! Plain-text rendering of boards, status, score and history.

use chrono::{DateTime, Utc};
use noughts_rules::{Board, GameStatus, Line, Mark};
use noughts_session::{HistoryLog, ScoreTally, SessionState};

/// Renders the board as a 3x3 grid.
///
/// Marks show as `X`/`O`. Empty cells show their index when `show_indices`
/// is set. Cells of `highlight` are wrapped in brackets.
pub fn board(board: &Board, highlight: Option<Line>, show_indices: bool) -> String {
    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match board[index] {
                    Some(mark) => mark.to_string(),
                    None if show_indices => index.to_string(),
                    None => " ".to_string(),
                };
                if highlight.is_some_and(|line| line.contains(&index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        result.push_str(&cells.join("|"));
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

/// One-line description of where the game stands.
pub fn status(state: &SessionState) -> String {
    match (state.outcome.status(), state.outcome.winner()) {
        (GameStatus::Won, Some(winner)) => format!("{} wins", winner),
        (GameStatus::Draw, _) => "Draw".to_string(),
        _ => format!("{} to move", state.to_move),
    }
}

/// Score summary.
pub fn score(score: &ScoreTally) -> String {
    format!(
        "X: {}  O: {}  Draws: {}",
        score.wins(Mark::X),
        score.wins(Mark::O),
        score.draws()
    )
}

/// History lines, newest first.
pub fn history(history: &HistoryLog) -> Vec<String> {
    history_at(history, Utc::now())
}

/// History lines relative to `now`.
///
/// Games finished on the same UTC day as `now` are labelled `Today`,
/// older ones with month and day (`Oct 18`).
pub fn history_at(history: &HistoryLog, now: DateTime<Utc>) -> Vec<String> {
    history
        .iter()
        .map(|entry| {
            let result = match entry.outcome().winner() {
                Some(winner) => format!("{} won", winner),
                None => "draw".to_string(),
            };
            let finished_at = entry.finished_at();
            let day = if finished_at.date_naive() == now.date_naive() {
                "Today".to_string()
            } else {
                finished_at.format("%b %-d").to_string()
            };
            format!(
                "#{} {} at {} {}",
                entry.id(),
                result,
                day,
                finished_at.format("%H:%M:%S")
            )
        })
        .collect()
}
