//! Linkrank Core Library
//!
//! Core functionality for linkrank, a PageRank-style importance scorer
//! for hyperlinked page corpora.
//!
//! # Features
//! - Directory corpus loading with anchor-tag link extraction
//! - Monte Carlo importance estimation via seeded random walk
//! - Deterministic power iteration with a bounded round count
//! - Score normalization to a probability distribution

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{RankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ROUNDS, DEFAULT_SAMPLES};
pub use corpus::{extract_links, load_corpus, scan_pages, ScanOptions, ScannedPage};
pub use error::{Error, LinkRankError, Result};
pub use graph::{Graph, PageId};
pub use rank::{iterate, normalize, sample, transition, Distribution, ScoreMap};
