//! Outcome derivation.

use super::draw::is_board_full;
use super::win::check_winner;
use crate::types::{Board, Outcome};
use tracing::{debug, instrument};

/// Derives the outcome of a board.
///
/// A winner takes precedence over a full board. Without a winner, a full
/// board is a draw and anything else is still playing.
#[instrument]
pub fn game_status(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::won(winner)
    } else if is_board_full(board) {
        Outcome::draw()
    } else {
        Outcome::playing()
    };
    debug!(status = %outcome.status(), winner = ?outcome.winner(), "Derived game status");
    outcome
}
