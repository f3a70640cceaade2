//! Ledger entry keys
//!
//! Transactions carry no persisted identity; the ledger assigns each entry a
//! monotonically increasing key when it is loaded or inserted. Keys are
//! deterministic for a given file (insertion order), so the key printed by a
//! listing remains valid for a later delete as long as the file is unchanged.

use std::fmt;
use std::str::FromStr;

/// Key of one ledger entry, assigned by the ledger and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    /// Wrap a raw key value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw key value
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
