//! Directed link graph over corpus pages

use std::collections::{HashMap, HashSet};

/// Page identifier within a corpus (typically a file name).
pub type PageId = String;

/// Immutable directed graph of pages and their out-links.
///
/// Construction enforces a closed universe (links to pages outside the
/// corpus are dropped) and removes self-links. The page list is kept
/// sorted so iteration order is stable across runs, which makes the
/// sampler's start-page selection reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct Graph {
    links: HashMap<PageId, HashSet<PageId>>,
    pages: Vec<PageId>,
}

impl Graph {
    /// Build a graph from a raw `page -> link targets` mapping.
    ///
    /// Targets that are not themselves keys of the mapping are dropped,
    /// as are links from a page to itself.
    pub fn from_links(raw: HashMap<PageId, HashSet<PageId>>) -> Self {
        let universe: HashSet<PageId> = raw.keys().cloned().collect();
        let links: HashMap<PageId, HashSet<PageId>> = raw
            .into_iter()
            .map(|(page, targets)| {
                let targets = targets
                    .into_iter()
                    .filter(|t| *t != page && universe.contains(t))
                    .collect();
                (page, targets)
            })
            .collect();

        let mut pages: Vec<PageId> = links.keys().cloned().collect();
        pages.sort();

        Self { links, pages }
    }

    /// Number of pages in the graph.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All page names in sorted order.
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Out-links of `page`, or `None` if the page is not in the graph.
    pub fn out_links(&self, page: &str) -> Option<&HashSet<PageId>> {
        self.links.get(page)
    }

    /// Out-degree of `page`; 0 for unknown pages.
    pub fn out_degree(&self, page: &str) -> usize {
        self.links.get(page).map(|s| s.len()).unwrap_or(0)
    }
}
