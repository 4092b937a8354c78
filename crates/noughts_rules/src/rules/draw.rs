//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_board_full(board: &Board) -> bool {
    board.cells().iter().all(Option::is_some)
}

/// Indices of the empty cells, ascending.
#[instrument]
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.is_none().then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::Mark;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    fn is_draw(board: &Board) -> bool {
        is_board_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_board_full(&board));
        assert_eq!(empty_cells(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, E]);
        assert!(!is_board_full(&board));
        assert_eq!(empty_cells(&board), vec![8]);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells([X; 9]);
        assert!(is_board_full(&board));
        assert!(empty_cells(&board).is_empty());
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert!(!is_draw(&board));
    }
}
