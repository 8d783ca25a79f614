//! Rank computation command

use linkrank_core::{iterate, load_corpus, sample, LinkRankError, RankConfig, ScanOptions};

use crate::app::{Cli, OutputFormat};
use crate::output;

/// Load the corpus and print both rank estimates.
pub fn run(cli: &Cli) -> Result<(), LinkRankError> {
    let options = ScanOptions {
        pattern: cli.pattern.clone(),
        ..Default::default()
    };
    let graph = load_corpus(&cli.corpus, &options)?;

    let config = RankConfig {
        damping: cli.damping,
        samples: cli.samples,
        seed: cli.seed,
        ..Default::default()
    };

    let sampled = sample(&graph, &config)?;
    let iterated = iterate(&graph, &config)?;

    let rendered = match cli.format {
        OutputFormat::Cli => output::terminal::format_ranks(&sampled, &iterated, config.samples),
        OutputFormat::Json => output::json::format_ranks(&sampled, &iterated, config.samples),
    };
    print!("{rendered}");

    Ok(())
}
