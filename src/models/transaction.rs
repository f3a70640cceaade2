//! Transaction model
//!
//! Represents one dated money movement. A transaction is an immutable value
//! record; the sign of the movement is carried by [`TxKind`], never by a
//! negative amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Bucket label used for transactions with an empty category
pub const UNCATEGORIZED: &str = "(uncategorized)";

/// The income/expense polarity of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown kind '{}'", other)),
        }
    }
}

/// A dated money movement
///
/// Field order matches the ledger file format: `date` is an ISO-8601 calendar
/// date, `amount` a non-negative number, `party` and `category` free text
/// (defaulting to empty when absent from the file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Amount moved; always non-negative, sign lives in `kind`
    pub amount: Money,

    /// Who the money came from or went to (may be empty)
    #[serde(default)]
    pub party: String,

    /// Free-text grouping label (may be empty)
    #[serde(default)]
    pub category: String,

    /// Income or expense
    pub kind: TxKind,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        party: impl Into<String>,
        category: impl Into<String>,
        kind: TxKind,
    ) -> Self {
        Self {
            date,
            amount,
            party: party.into(),
            category: category.into(),
            kind,
        }
    }

    /// Category label for grouping, with the empty string mapped to
    /// [`UNCATEGORIZED`]
    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Calendar year of the transaction date
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.date.year()
    }

    /// Calendar month (1-12) of the transaction date
    pub fn month(&self) -> u32 {
        use chrono::Datelike;
        self.date.month()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.party
        )
    }
}
