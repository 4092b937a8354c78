//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - hot-seat tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, taking turns at the keyboard
    Play,

    /// Apply moves in order and print the final board
    Replay {
        /// Cells to play, X first (indices 0-8 or names like `center`)
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
