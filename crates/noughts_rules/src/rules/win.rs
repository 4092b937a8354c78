//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Line, Mark};
use tracing::instrument;

/// Every line that wins when one mark fills it, in scan order.
///
/// Rows first, then columns, then the two diagonals. When a board holds
/// more than one complete line, the earliest line here decides the result.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// First line fully owned by one mark, with that mark.
fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| match board[a] {
        Some(mark) if board[b] == Some(mark) && board[c] == Some(mark) => Some((line, mark)),
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

/// Returns the indices of the winning line, if any.
///
/// Uses the same scan as [`check_winner`], so the two always agree.
#[instrument]
pub fn winning_cells(board: &Board) -> Option<Line> {
    winning_line(board).map(|(line, _)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_cells(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_cells([X, X, X, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_cells(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_every_line() {
        for line in LINES {
            let mut cells = [E; 9];
            for i in line {
                cells[i] = O;
            }
            let board = Board::from_cells(cells);
            assert_eq!(check_winner(&board), Some(Mark::O), "line {line:?}");
            assert_eq!(winning_cells(&board), Some(line), "line {line:?}");
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_cells([E, E, X, E, X, E, X, E, E]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_cells(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_cells(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // O owns the middle row, X owns the bottom row.
        let board = Board::from_cells([E, E, E, O, O, O, X, X, X]);
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert_eq!(winning_cells(&board), Some([3, 4, 5]));

        // X owns the left column, O owns the right column.
        let board = Board::from_cells([X, E, O, X, E, O, X, E, O]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_cells(&board), Some([0, 3, 6]));
    }
}
