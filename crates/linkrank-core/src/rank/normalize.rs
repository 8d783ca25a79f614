//! Score map normalization

use super::ScoreMap;
use crate::error::{LinkRankError, Result};

/// Rescale `scores` so the values sum to 1.0.
///
/// Idempotent: normalizing an already-normalized map leaves the values
/// unchanged up to floating tolerance.
pub fn normalize(scores: ScoreMap) -> Result<ScoreMap> {
    let total: f64 = scores.values().sum();
    if scores.is_empty() || total == 0.0 {
        return Err(LinkRankError::EmptyScoreMap);
    }

    Ok(scores
        .into_iter()
        .map(|(page, score)| (page, score / total))
        .collect())
}
