//! Move rejection errors.

use crate::types::Mark;
use derive_more::{Display, Error};

/// Reasons the engine refuses a move.
///
/// Both are recoverable: the caller keeps its current board and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {index} is already occupied by {occupant}")]
    IllegalMove {
        /// Requested cell.
        index: usize,
        /// Mark already in the cell.
        occupant: Mark,
    },

    /// The index is not on the board (valid indices are 0-8).
    #[display("Cell index {index} is out of range (must be 0-8)")]
    InvalidIndex {
        /// Requested index.
        index: usize,
    },
}

impl MoveError {
    /// Index the rejected move targeted.
    pub fn index(&self) -> usize {
        match self {
            MoveError::IllegalMove { index, .. } | MoveError::InvalidIndex { index } => *index,
        }
    }
}
