//! Transition model for the random surfer

use super::Distribution;
use crate::error::{LinkRankError, Result};
use crate::graph::Graph;

/// Probability distribution over which page a surfer visits next.
///
/// With probability `damping` the surfer follows one of `page`'s
/// out-links; the remaining mass is split evenly between the page itself
/// and its successors. A page with no out-links yields the uniform
/// distribution over all pages.
///
/// Pages that are neither `page` nor one of its successors are absent
/// from the result (implicit probability zero). The damping complement
/// is spread over `out_degree + 1` pages (the page plus its successors),
/// not over the whole graph. Present values always sum to 1.0.
pub fn transition(graph: &Graph, page: &str, damping: f64) -> Result<Distribution> {
    let n = graph.len();
    if n == 0 {
        return Err(LinkRankError::EmptyGraph);
    }

    let out = graph
        .out_links(page)
        .ok_or_else(|| LinkRankError::PageNotFound(page.to_string()))?;

    let mut dist = Distribution::new();

    if out.is_empty() {
        let uniform = 1.0 / n as f64;
        for p in graph.pages() {
            dist.insert(p.clone(), uniform);
        }
        return Ok(dist);
    }

    let k = out.len() as f64;
    let total = k + 1.0;
    let stay = (1.0 - damping) / total;

    dist.insert(page.to_string(), stay);
    for target in out {
        dist.insert(target.clone(), stay + damping / k);
    }

    Ok(dist)
}
