//! Ledger persistence in a single JSON file
//!
//! The whole ledger is rewritten atomically after every mutation; there is no
//! incremental persistence. Loading is all-or-nothing: one malformed record
//! fails the entire load, and the forgiving entry point degrades to an empty
//! ledger instead of surfacing the error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::Transaction;

/// On-disk shape of the ledger file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LedgerData {
    transactions: Vec<Transaction>,
}

/// Persistence collaborator for the ledger
///
/// Owns the file path and the wire format; the ledger itself knows nothing
/// about storage.
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    /// Create a store for the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the ledger, failing on malformed content
    ///
    /// An absent file is an empty ledger. A record that fails to parse (bad
    /// date, non-numeric amount, missing or invalid kind) fails the whole
    /// load with [`TallyError::MalformedRecord`]; a file that is not JSON at
    /// all fails with [`TallyError::Json`].
    pub fn load(&self) -> TallyResult<Ledger> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "ledger file absent, starting empty");
            return Ok(Ledger::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let data: LedgerData = serde_json::from_str(&raw).map_err(|e| {
            if e.is_data() {
                TallyError::MalformedRecord(e.to_string())
            } else {
                TallyError::Json(e.to_string())
            }
        })?;

        debug!(count = data.transactions.len(), "loaded ledger");
        Ok(Ledger::from_transactions(data.transactions))
    }

    /// Load the ledger, silently recovering from any parse failure
    ///
    /// The entire file is discarded on failure; there is no per-record
    /// recovery, so a partially-loaded ledger is never observed.
    pub fn load_or_default(&self) -> Ledger {
        match self.load() {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unreadable ledger file, starting empty"
                );
                Ledger::new()
            }
        }
    }

    /// Save the whole ledger, atomically replacing the file
    pub fn save(&self, ledger: &Ledger) -> TallyResult<()> {
        let data = LedgerData {
            transactions: ledger.transactions().cloned().collect(),
        };
        super::file_io::write_json_atomic(&self.path, &data)
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
