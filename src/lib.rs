//! Noughts library - terminal front end for hot-seat tic-tac-toe
//!
//! # Architecture
//!
//! - **Config**: TOML settings for the front end
//! - **Render**: plain-text board, status, score and history
//! - **Repl**: interactive game loop over any reader and writer
//! - **Replay**: scripted play from a list of moves
//!
//! Rules live in `noughts_rules`; turn order, score and history live in
//! `noughts_session`.
//!
//! # Example
//!
//! ```
//! use noughts::{AppConfig, Repl};
//!
//! let input = std::io::Cursor::new("4\n0\nquit\n");
//! let mut output = Vec::new();
//! let mut repl = Repl::new(input, &mut output, &AppConfig::default());
//! repl.run()?;
//! assert_eq!(repl.session().board().count(noughts_rules::Mark::X), 1);
//! # Ok::<(), std::io::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod render;
mod repl;
mod replay;

pub use config::{AppConfig, ConfigError, MAX_HISTORY_CAPACITY};
pub use repl::{Input, Repl};
pub use replay::{ReplayError, replay};
