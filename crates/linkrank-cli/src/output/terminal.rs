//! Terminal output formatter

use linkrank_core::ScoreMap;

/// Render both score maps, pages sorted, scores to four decimal places.
pub fn format_ranks(sampled: &ScoreMap, iterated: &ScoreMap, samples: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("PageRank Results from Sampling (n = {samples})\n"));
    for (page, score) in sampled {
        output.push_str(&format!("  {page}: {score:.4}\n"));
    }

    output.push_str("PageRank Results from Iteration\n");
    for (page, score) in iterated {
        output.push_str(&format!("  {page}: {score:.4}\n"));
    }

    output
}
