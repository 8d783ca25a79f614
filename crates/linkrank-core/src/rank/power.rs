//! Deterministic rank computation by power iteration

use std::collections::HashMap;

use tracing::debug;

use super::{normalize, ScoreMap};
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::{Graph, PageId};

/// Per-page absolute convergence threshold on raw scores.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-3;

/// Compute page importance as the fixed point of the rank equation.
///
/// Every page starts at `1/N`. Each round is a synchronous (Jacobi)
/// update: every new score is computed from the previous round's
/// snapshot. A page's incoming mass is the sum of `score/out_degree`
/// over its in-neighbours, with dangling pages contributing `score/N`
/// to every page. Iteration stops once a full round moves no page by
/// more than [`CONVERGENCE_THRESHOLD`]; the result is then normalized
/// so it sums to exactly 1.0.
///
/// Exceeding `config.max_rounds` yields
/// [`LinkRankError::ConvergenceFailure`].
pub fn iterate(graph: &Graph, config: &RankConfig) -> Result<ScoreMap> {
    let n = graph.len();
    if n == 0 {
        return Err(LinkRankError::EmptyGraph);
    }
    let n_f = n as f64;
    let base = (1.0 - config.damping) / n_f;

    // In-link lists and dangling pages, computed once. Sources are pushed
    // in sorted page order, keeping the float summation order stable.
    let mut in_links: HashMap<&PageId, Vec<&PageId>> = HashMap::new();
    let mut dangling: Vec<&PageId> = Vec::new();
    for source in graph.pages() {
        match graph.out_links(source) {
            Some(out) if !out.is_empty() => {
                for target in out {
                    in_links.entry(target).or_default().push(source);
                }
            }
            _ => dangling.push(source),
        }
    }

    let mut scores: ScoreMap = graph
        .pages()
        .iter()
        .map(|p| (p.clone(), 1.0 / n_f))
        .collect();

    for round in 0..config.max_rounds {
        let mut next = ScoreMap::new();
        let mut settled = true;

        for page in graph.pages() {
            let mut incoming = 0.0;
            if let Some(sources) = in_links.get(page) {
                for source in sources {
                    incoming += scores[*source] / graph.out_degree(source.as_str()) as f64;
                }
            }
            for source in &dangling {
                incoming += scores[*source] / n_f;
            }

            let new_score = base + config.damping * incoming;
            if (new_score - scores[page]).abs() > CONVERGENCE_THRESHOLD {
                settled = false;
            }
            next.insert(page.clone(), new_score);
        }

        scores = next;
        if settled {
            debug!(rounds = round + 1, "power iteration converged");
            return normalize(scores);
        }
    }

    Err(LinkRankError::ConvergenceFailure(config.max_rounds))
}
