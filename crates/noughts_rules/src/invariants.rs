//! First-class invariants over boards.
//!
//! Invariants are logical properties that must hold for every board the
//! engine evaluates. They are checked in debug builds by the session layer
//! and can be tested independently.

use crate::rules::{check_winner, game_status, is_board_full, winning_cells};
use crate::types::{Board, GameStatus, Outcome};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the winning line and the winner describe the same result.
///
/// `winning_cells` is present exactly when `check_winner` is, and all three
/// cells hold the winner.
pub struct WinnerAgreement;

impl Invariant<Board> for WinnerAgreement {
    fn holds(board: &Board) -> bool {
        match (winning_cells(board), check_winner(board)) {
            (None, None) => true,
            (Some(line), Some(winner)) => line.iter().all(|&i| board[i] == Some(winner)),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning cells agree with the winner"
    }
}

/// Invariant: a winner outranks a full board when deriving status.
pub struct StatusPrecedence;

impl Invariant<Board> for StatusPrecedence {
    fn holds(board: &Board) -> bool {
        let expected = match check_winner(board) {
            Some(winner) => Outcome::won(winner),
            None if is_board_full(board) => Outcome::draw(),
            None => Outcome::playing(),
        };
        let outcome = game_status(board);
        outcome == expected && (outcome.winner().is_some() == (outcome.status() == GameStatus::Won))
    }

    fn description() -> &'static str {
        "Status follows win-before-draw precedence"
    }
}

/// All rules invariants as a composable set.
pub type RulesInvariants = (WinnerAgreement, StatusPrecedence);
