//! CLI commands

pub mod rank;
