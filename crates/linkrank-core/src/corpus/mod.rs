//! Corpus loading: directory scanning and link extraction

mod links;
mod scanner;

pub use links::extract_links;
pub use scanner::{scan_pages, ScanOptions, ScannedPage};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::graph::{Graph, PageId};

/// Read every page under `root` and build the link graph.
///
/// Each scanned page becomes a node named by its corpus-relative path.
/// Anchor targets pointing outside the corpus and self-links are dropped
/// by the graph constructor.
pub fn load_corpus(root: &Path, options: &ScanOptions) -> Result<Graph> {
    let mut raw: HashMap<PageId, HashSet<PageId>> = HashMap::new();

    for page in scan_pages(root, options)? {
        let content = fs::read_to_string(&page.path)?;
        let targets: HashSet<PageId> = extract_links(&content).into_iter().collect();
        debug!(page = %page.name, links = targets.len(), "scanned page");
        raw.insert(page.name, targets);
    }

    info!(pages = raw.len(), "corpus loaded");
    Ok(Graph::from_links(raw))
}
