//! Non-interactive play from a list of moves.

use crate::config::AppConfig;
use crate::render;
use derive_more::{Display, Error};
use noughts_rules::{Outcome, Position};
use noughts_session::{Session, SessionError};
use std::io::Write;
use tracing::{info, instrument};

/// Why a replay stopped early.
#[derive(Debug, Display, Error)]
pub enum ReplayError {
    /// A move was neither an index nor a cell name.
    #[display("Move {step}: '{input}' is not a cell")]
    UnknownCell {
        /// 1-based move number.
        step: usize,
        /// Text as given.
        input: String,
    },

    /// The session refused a move.
    #[display("Move {step}: {source}")]
    Rejected {
        /// 1-based move number.
        step: usize,
        /// Reason given by the session.
        source: SessionError,
    },

    /// Writing the result failed.
    #[display("Failed to write output: {_0}")]
    Io(std::io::Error),
}

/// Plays `moves` in order from an empty board, alternating marks from X,
/// then writes the final board and status to `out`.
///
/// Stops at the first move that cannot be played.
#[instrument(skip(config, out))]
pub fn replay<S: AsRef<str> + std::fmt::Debug>(
    moves: &[S],
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<Outcome, ReplayError> {
    let mut session = Session::with_history_capacity(*config.history_capacity());

    for (i, mv) in moves.iter().enumerate() {
        let step = i + 1;
        let position =
            Position::from_label_or_number(mv.as_ref()).ok_or_else(|| ReplayError::UnknownCell {
                step,
                input: mv.as_ref().to_string(),
            })?;
        session
            .play_position(position)
            .map_err(|source| ReplayError::Rejected { step, source })?;
    }

    let state = session.state();
    writeln!(
        out,
        "{}\n{}",
        render::board(&state.board, session.winning_cells(), *config.show_indices()),
        render::status(state)
    )
    .map_err(ReplayError::Io)?;

    info!(moves = moves.len(), status = %state.outcome.status(), "Replay finished");
    Ok(state.outcome)
}
