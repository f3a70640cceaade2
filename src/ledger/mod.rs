//! In-memory transaction ledger
//!
//! The ledger is the ordered collection of all recorded transactions plus the
//! query functions the presentation layer consumes: year enumeration,
//! year/month filtering, and the aggregation functions in [`totals`].
//!
//! Entries keep insertion order, duplicates included; there is no uniqueness
//! constraint. Each entry gets a monotonically increasing [`EntryId`] at
//! insertion time so deletion addresses exactly one entry even when two
//! transactions are structurally identical. Keys are not persisted and are
//! re-assigned in insertion order on every load.
//!
//! All operations are synchronous and run to completion; mutation goes
//! through `&mut self`, so a single logical writer is enforced by the
//! borrow checker. Callers that share a ledger across threads must wrap it
//! in their own mutex.

pub mod totals;

pub use totals::Totals;

use std::collections::BTreeSet;

use chrono::{Datelike, Local};

use crate::models::{EntryId, Transaction};

/// One stored transaction together with its ledger-assigned key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Key assigned at insertion, valid until the entry is removed
    pub id: EntryId,
    /// The recorded transaction
    pub tx: Transaction,
}

/// The ordered collection of all recorded transactions
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    next_id: u64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from persisted transactions, assigning keys in order
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let mut ledger = Self::new();
        for tx in transactions {
            ledger.add(tx);
        }
        ledger
    }

    /// Append a transaction to the end of the ledger
    ///
    /// Always succeeds; the ledger performs no validation and trusts callers
    /// to hand over well-formed transactions.
    pub fn add(&mut self, tx: Transaction) -> EntryId {
        let id = EntryId::from_raw(self.next_id);
        self.next_id += 1;
        self.entries.push(LedgerEntry { id, tx });
        id
    }

    /// Remove the entry with the given key
    ///
    /// Returns `false` and changes nothing if no entry has that key.
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// All entries in storage (insertion) order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Iterator over the stored transactions in storage order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().map(|e| &e.tx)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct calendar years present across all transactions, ascending
    ///
    /// An empty ledger yields the current year, so callers always have a
    /// year to select.
    pub fn all_years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.transactions().map(|t| t.year()).collect();
        if years.is_empty() {
            vec![Local::now().date_naive().year()]
        } else {
            years.into_iter().collect()
        }
    }

    /// All entries whose date falls in `year`, in storage order
    ///
    /// Callers apply ordering if display requires it.
    pub fn for_year(&self, year: i32) -> Vec<&LedgerEntry> {
        self.entries
            .iter()
            .filter(|e| e.tx.year() == year)
            .collect()
    }

    /// All entries in `year`, restricted to `month` (1-12) when given
    ///
    /// `None` means all months of the year.
    pub fn for_year_and_month(&self, year: i32, month: Option<u32>) -> Vec<&LedgerEntry> {
        self.entries
            .iter()
            .filter(|e| e.tx.year() == year && month.map_or(true, |m| e.tx.month() == m))
            .collect()
    }
}
