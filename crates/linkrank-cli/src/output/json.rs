//! JSON output formatter

use linkrank_core::ScoreMap;

pub fn format_ranks(sampled: &ScoreMap, iterated: &ScoreMap, samples: usize) -> String {
    let value = serde_json::json!({
        "samples": samples,
        "sampling": sampled,
        "iteration": iterated,
    });

    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
