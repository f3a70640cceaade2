//! Configuration module for tally-cli
//!
//! Path resolution for the ledger data directory.

pub mod paths;

pub use paths::TallyPaths;
