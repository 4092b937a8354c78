//! Noughts - hot-seat tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, Repl, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    info!(?config, "Starting noughts");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = std::io::stdin();
            let mut repl = Repl::new(stdin.lock(), std::io::stdout(), &config);
            repl.run()?;
        }
        Command::Replay { moves } => {
            replay(moves.as_slice(), &config, &mut std::io::stdout())?;
        }
    }

    Ok(())
}
