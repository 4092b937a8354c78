//! Board construction and move application.

use crate::error::MoveError;
use crate::types::{Board, CELL_COUNT, Mark};
use tracing::{debug, instrument};

/// Returns a fresh board with every cell empty.
#[instrument]
pub fn create_initial_board() -> Board {
    Board::new()
}

/// Places `mark` at `index`, returning the resulting board.
///
/// The input board is never modified. On rejection no board is produced
/// and the caller keeps what it had.
///
/// # Errors
///
/// - [`MoveError::InvalidIndex`] if `index` is not in `0..9`.
/// - [`MoveError::IllegalMove`] if the cell is already occupied.
#[instrument]
pub fn make_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    if index >= CELL_COUNT {
        debug!(index, "Rejected out-of-range index");
        return Err(MoveError::InvalidIndex { index });
    }

    if let Some(occupant) = board[index] {
        debug!(index, %occupant, "Rejected move onto occupied cell");
        return Err(MoveError::IllegalMove { index, occupant });
    }

    Ok(board.with_mark(index, mark))
}
