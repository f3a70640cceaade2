//! Core data models for tally-cli
//!
//! This module contains the data structures that represent the ledger domain:
//! money amounts, transactions, and ledger entry keys.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::EntryId;
pub use money::Money;
pub use transaction::{Transaction, TxKind, UNCATEGORIZED};
