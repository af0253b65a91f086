//! Command-line surface over the core export engine.

pub mod cli;
pub mod commands;
pub mod db;

use anyhow::Result;
use cli::{Cli, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean
/// for command output; RUST_LOG overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Dispatch one parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export(args) => commands::run_export(&args),
        Command::Decks(args) => commands::run_decks(&args),
        Command::Fields(args) => commands::run_fields(&args),
        Command::Preview(args) => commands::run_preview(&args),
        Command::Import(args) => commands::run_import(&args),
    }
}
