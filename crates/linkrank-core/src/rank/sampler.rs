//! Monte Carlo rank estimation by random walk

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use super::{transition, ScoreMap};
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::{Graph, PageId};

/// Estimate page importance by sampling `config.samples` steps of the
/// random-surfer Markov chain.
///
/// The walk starts at a page drawn uniformly from the sorted page list.
/// Each later step draws the next page from the transition distribution
/// of the current one: a uniform value in `[0, 1)` is matched against
/// the cumulative probabilities, walking the pairs in page-name order.
///
/// Scores are visit counts divided by the sample count, so they sum to
/// 1.0 over the visited pages. Pages never visited are absent from the
/// result, not present with a zero score.
///
/// With `config.seed` set, the full walk is reproducible.
pub fn sample(graph: &Graph, config: &RankConfig) -> Result<ScoreMap> {
    if graph.is_empty() {
        return Err(LinkRankError::EmptyGraph);
    }
    if config.samples < 1 {
        return Err(LinkRankError::InvalidSampleCount(config.samples));
    }

    // Optionally seeded RNG for reproducibility
    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(rand::thread_rng()),
    };

    let pages = graph.pages();
    let mut current: PageId = pages[rng.gen_range(0..pages.len())].clone();

    let mut counts: HashMap<PageId, usize> = HashMap::new();
    *counts.entry(current.clone()).or_insert(0) += 1;

    for _ in 1..config.samples {
        let dist = transition(graph, &current, config.damping)?;
        let draw: f64 = rng.gen();

        let mut cumulative = 0.0;
        for (page, probability) in &dist {
            cumulative += probability;
            if draw <= cumulative {
                current = page.clone();
                break;
            }
        }

        *counts.entry(current.clone()).or_insert(0) += 1;
    }

    debug!(
        samples = config.samples,
        visited = counts.len(),
        "sampling walk complete"
    );

    let n = config.samples as f64;
    Ok(counts
        .into_iter()
        .map(|(page, count)| (page, count as f64 / n))
        .collect())
}
