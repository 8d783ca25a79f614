//! Node-importance estimation over the link graph
//!
//! Two independent estimators: a Monte Carlo random-surfer sampler
//! ([`sample`]) and a deterministic power iteration ([`iterate`]). Both
//! consume an immutable [`Graph`](crate::graph::Graph) and a
//! [`RankConfig`](crate::config::RankConfig) and produce a [`ScoreMap`].

mod normalize;
mod power;
mod sampler;
mod transition;

pub use normalize::normalize;
pub use power::{iterate, CONVERGENCE_THRESHOLD};
pub use sampler::sample;
pub use transition::transition;

use crate::graph::PageId;
use std::collections::BTreeMap;

/// Importance estimate per page. Ordered by page name so printed output
/// is sorted without further work.
pub type ScoreMap = BTreeMap<PageId, f64>;

/// Probability distribution over "next page". Ordered by page name so
/// cumulative draws are deterministic across runs and platforms.
pub type Distribution = BTreeMap<PageId, f64>;
