//! Linkrank CLI
//!
//! Ranks the pages of a hyperlink corpus by importance, using both a
//! Monte Carlo sampler and deterministic power iteration.

use anyhow::Result;
use clap::Parser;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = commands::rank::run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
