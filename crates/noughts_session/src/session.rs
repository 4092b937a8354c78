//! Hot-seat game session.

use crate::error::SessionError;
use crate::history::{HistoryEntry, HistoryLog};
use crate::score::ScoreTally;
use noughts_rules::{
    Board, InvariantSet, Line, Mark, Outcome, Position, RulesInvariants, create_initial_board,
    game_status, make_move, winning_cells,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Snapshot of the game currently being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current board.
    pub board: Board,
    /// Mark that moves next.
    pub to_move: Mark,
    /// Outcome derived from the board.
    pub outcome: Outcome,
}

impl SessionState {
    /// Empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: create_initial_board(),
            to_move: Mark::X,
            outcome: Outcome::playing(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Two players sharing one board across a run of games.
///
/// Owns the mutable side of play: whose turn it is, the running score and
/// a short log of recent results. All rule decisions are delegated to
/// [`noughts_rules`].
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    score: ScoreTally,
    history: HistoryLog,
    games_finished: u64,
}

impl Session {
    /// Creates a session with the default history capacity.
    #[instrument]
    pub fn new() -> Self {
        Self::with_history(HistoryLog::default())
    }

    /// Creates a session keeping at most `capacity` finished games.
    #[instrument]
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self::with_history(HistoryLog::with_capacity(capacity))
    }

    fn with_history(history: HistoryLog) -> Self {
        info!(history_capacity = history.capacity(), "Creating session");
        Self {
            state: SessionState::new(),
            score: ScoreTally::new(),
            history,
            games_finished: 0,
        }
    }

    /// Current game snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.state.to_move
    }

    /// Outcome of the current game.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Running score.
    pub fn score(&self) -> &ScoreTally {
        &self.score
    }

    /// Recent finished games, newest first.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Winning line on the current board, if any.
    pub fn winning_cells(&self) -> Option<Line> {
        winning_cells(&self.state.board)
    }

    /// Plays the current mark at `index`.
    ///
    /// On success the turn passes to the other mark and the new outcome is
    /// returned. A game that ends with this move is counted in the score
    /// and logged in the history exactly once.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game is decided, or
    /// [`SessionError::Move`] if the rules reject the move. The session is
    /// unchanged in both cases.
    #[instrument(skip(self), fields(to_move = %self.state.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.state.outcome.is_terminal() {
            warn!(index, status = %self.state.outcome.status(), "Move after game over");
            return Err(SessionError::GameOver);
        }

        let mark = self.state.to_move;
        let board = make_move(&self.state.board, index, mark)
            .inspect_err(|e| warn!(index, error = %e, "Move rejected"))?;
        let outcome = game_status(&board);

        debug_assert!(
            RulesInvariants::check_all(&board).is_ok(),
            "Rules invariants violated"
        );
        debug_assert!(
            board.count(Mark::O) <= board.count(Mark::X)
                && board.count(Mark::X) <= board.count(Mark::O) + 1,
            "Marks out of balance"
        );

        self.state = SessionState {
            board,
            to_move: mark.opponent(),
            outcome,
        };
        debug!(index, %mark, status = %outcome.status(), "Move applied");

        if outcome.is_terminal() {
            self.finish(outcome);
        }

        Ok(outcome)
    }

    /// Plays the current mark at a named position.
    pub fn play_position(&mut self, position: Position) -> Result<Outcome, SessionError> {
        self.play(position.to_index())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.games_finished += 1;
        self.score.record(&outcome);
        self.history.push(HistoryEntry::new(self.games_finished, outcome));
        info!(
            game = self.games_finished,
            status = %outcome.status(),
            winner = ?outcome.winner(),
            "Game finished"
        );
    }

    /// Starts a fresh game. Score and history are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.state = SessionState::new();
        info!("New game started");
    }

    /// Starts a fresh game and clears the score and history.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.state = SessionState::new();
        self.score = ScoreTally::new();
        self.history.clear();
        self.games_finished = 0;
        info!("Session reset");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
