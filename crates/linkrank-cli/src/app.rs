//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(version, about = "Rank the pages of a hyperlink corpus by importance")]
pub struct Cli {
    /// Corpus directory to rank
    pub corpus: PathBuf,

    /// Damping factor (probability of following a link vs teleporting)
    #[arg(long, default_value_t = linkrank_core::DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of Monte Carlo steps for the sampling estimator
    #[arg(long, default_value_t = linkrank_core::DEFAULT_SAMPLES)]
    pub samples: usize,

    /// RNG seed for reproducible sampling
    #[arg(long, env = "LINKRANK_SEED")]
    pub seed: Option<u64>,

    /// Glob pattern for corpus pages
    #[arg(long, default_value = "*.html")]
    pub pattern: String,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
