//! Running score across games.

use noughts_rules::{GameStatus, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per mark plus draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games recorded in total.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Records a finished game. In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        match (outcome.status(), outcome.winner()) {
            (GameStatus::Won, Some(Mark::X)) => self.x_wins += 1,
            (GameStatus::Won, Some(Mark::O)) => self.o_wins += 1,
            (GameStatus::Draw, _) => self.draws += 1,
            _ => {
                debug!("Ignoring non-terminal outcome");
                return;
            }
        }
        debug!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Score updated");
    }
}
