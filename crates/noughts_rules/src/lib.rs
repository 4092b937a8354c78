//! Pure tic-tac-toe rules engine.
//!
//! Decides whether a move is legal, applies it to a copy of the board, and
//! derives the game outcome (playing, won or drawn) along with the winning
//! line.
//!
//! # Example
//!
//! ```
//! use noughts_rules::{GameStatus, Mark, create_initial_board, game_status, make_move};
//!
//! let board = create_initial_board();
//! let board = make_move(&board, 4, Mark::X)?;
//! assert_eq!(game_status(&board).status(), GameStatus::Playing);
//! # Ok::<(), noughts_rules::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod position;
mod rules;
mod types;

pub use error::MoveError;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, RulesInvariants, StatusPrecedence,
    WinnerAgreement,
};
pub use position::Position;
pub use rules::{
    LINES, check_winner, create_initial_board, empty_cells, game_status, is_board_full,
    make_move, winning_cells,
};
pub use types::{Board, CELL_COUNT, Cell, GameStatus, Line, Mark, Outcome};
