//! Session error types.

use derive_more::{Display, Error, From};
use noughts_rules::MoveError;

/// Why a session refused a move.
///
/// Either way the session is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The current game is won or drawn; start a new one first.
    #[display("Game is already over")]
    GameOver,

    /// The rules engine rejected the move.
    #[display("Invalid move: {_0}")]
    #[from]
    Move(MoveError),
}
