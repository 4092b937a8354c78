//! Session controller for hot-seat tic-tac-toe.
//!
//! # Architecture
//!
//! - **Session**: current board, turn order and outcome
//! - **Score**: wins per mark plus draws, counted once per finished game
//! - **History**: the most recent finished games, newest first
//!
//! Rule decisions come from [`noughts_rules`]; this crate only keeps the
//! mutable state around them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod score;
mod session;

pub use error::SessionError;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryLog};
pub use score::ScoreTally;
pub use session::{Session, SessionState};
