//! Line-oriented hot-seat game loop.

use crate::config::AppConfig;
use crate::render;
use noughts_rules::Position;
use noughts_session::{Session, SessionError};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  0-8 or a cell name (e.g. 'center', 'top-left')  place your mark
  new      start another game (keeps score)
  reset    start over and clear score and history
  score    show the score
  history  show recent games
  help     show this message
  quit     leave";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current mark.
    Cell(Position),
    /// Start another game.
    NewGame,
    /// Clear everything and start another game.
    ResetAll,
    /// Print the score.
    Score,
    /// Print recent games.
    History,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

impl Input {
    /// Parses a command or a cell. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "new" | "n" => Some(Input::NewGame),
            "reset" => Some(Input::ResetAll),
            "score" | "s" => Some(Input::Score),
            "history" | "h" => Some(Input::History),
            "help" | "?" => Some(Input::Help),
            "quit" | "q" | "exit" => Some(Input::Quit),
            other => Position::from_label_or_number(other).map(Input::Cell),
        }
    }
}

/// Reads commands from `input` and writes the game to `output`.
#[derive(Debug)]
pub struct Repl<R, W> {
    input: R,
    output: W,
    session: Session,
    show_indices: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a loop over a fresh session.
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        Self {
            input,
            output,
            session: Session::with_history_capacity(*config.history_capacity()),
            show_indices: *config.show_indices(),
        }
    }

    /// Session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Tic-tac-toe. Type 'help' for commands.")?;
        self.show_board()?;

        let mut line = String::new();
        loop {
            if self.session.outcome().is_terminal() {
                write!(self.output, "> ")?;
            } else {
                write!(self.output, "{}> ", self.session.to_move())?;
            }
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Input::parse(&line) {
                Some(Input::Quit) => break,
                Some(input) => self.handle(input)?,
                None => writeln!(
                    self.output,
                    "Unrecognized input '{}'. Type 'help' for commands.",
                    line.trim()
                )?,
            }
        }
        Ok(())
    }

    fn handle(&mut self, input: Input) -> io::Result<()> {
        debug!(?input, "Handling input");
        match input {
            Input::Cell(position) => match self.session.play_position(position) {
                Ok(outcome) => {
                    self.show_board()?;
                    if outcome.is_terminal() {
                        writeln!(self.output, "{}", render::score(self.session.score()))?;
                        writeln!(self.output, "Type 'new' to play again.")?;
                    }
                }
                Err(SessionError::GameOver) => {
                    writeln!(self.output, "Game is over. Type 'new' to play again.")?
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Input::NewGame => {
                self.session.new_game();
                self.show_board()?;
            }
            Input::ResetAll => {
                self.session.reset_all();
                writeln!(self.output, "Score and history cleared.")?;
                self.show_board()?;
            }
            Input::Score => writeln!(self.output, "{}", render::score(self.session.score()))?,
            Input::History => {
                let lines = render::history(self.session.history());
                if lines.is_empty() {
                    writeln!(self.output, "No finished games yet.")?;
                }
                for line in lines {
                    writeln!(self.output, "{}", line)?;
                }
            }
            Input::Help => writeln!(self.output, "{}", HELP)?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn show_board(&mut self) -> io::Result<()> {
        let state = self.session.state();
        writeln!(
            self.output,
            "{}\n{}",
            render::board(&state.board, self.session.winning_cells(), self.show_indices),
            render::status(state)
        )
    }
}
