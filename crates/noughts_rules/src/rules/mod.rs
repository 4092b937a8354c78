//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. Nothing here holds
//! state, so every function can be called from any thread without locking.

pub mod draw;
pub mod moves;
pub mod status;
pub mod win;

pub use draw::{empty_cells, is_board_full};
pub use moves::{create_initial_board, make_move};
pub use status::game_status;
pub use win::{LINES, check_winner, winning_cells};
