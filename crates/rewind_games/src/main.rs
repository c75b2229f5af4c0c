//! Rewind - terminal tic-tac-toe with move history and time-travel.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::RewindConfig;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { descending } => {
            let config = config.with_descending(descending);
            initialize_file_tracing(&config)?;
            tui::run_tui(&config)
        }
        Command::Replay { intents, format } => {
            initialize_stderr_tracing(&config);
            info!(count = intents.len(), ?format, "Replaying intents");
            let store = replay::replay(&intents, *config.descending());
            println!("{}", replay::render(&store, format)?);
            Ok(())
        }
    }
}

fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so the terminal UI is not disturbed.
fn initialize_file_tracing(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout for replay output.
fn initialize_stderr_tracing(config: &RewindConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
