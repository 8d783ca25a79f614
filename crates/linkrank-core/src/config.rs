//! Estimator configuration

use serde::{Deserialize, Serialize};

/// Default damping factor (probability of following a link vs teleporting).
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of Monte Carlo steps for the sampler.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default safety cap on power-iteration rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Configuration shared by both rank estimators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor, in `[0, 1]`. Typically 0.85.
    pub damping: f64,
    /// Number of Monte Carlo steps for the sampling estimator.
    pub samples: usize,
    /// Optional RNG seed for reproducible sampling.
    pub seed: Option<u64>,
    /// Stop power iteration with an error after this many rounds.
    pub max_rounds: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            seed: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}
