//! tally-cli - Terminal-based personal finance ledger
//!
//! This library provides the core functionality for the tally-cli
//! application: a single-user ledger of dated income/expense transactions
//! with time-bucketed aggregates (per-month, per-year, per-category) derived
//! for display and export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the ledger file
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, entry keys)
//! - `ledger`: The in-memory ledger and its aggregation functions
//! - `storage`: JSON file storage layer
//! - `export`: CSV export
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::config::TallyPaths;
//! use tally_cli::storage::JsonLedgerStore;
//!
//! let paths = TallyPaths::new()?;
//! let store = JsonLedgerStore::new(paths.ledger_file());
//! let ledger = store.load_or_default();
//! let totals = ledger.yearly_totals(2024);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod storage;

pub use error::{TallyError, TallyResult};
pub use ledger::{Ledger, LedgerEntry, Totals};
