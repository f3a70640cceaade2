//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger and storage layers.

pub mod export;
pub mod report;
pub mod transaction;

pub use export::handle_export;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_add, handle_delete, handle_list, handle_years};

use chrono::Datelike;
use clap::ValueEnum;

use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::TxKind;

/// Transaction kind as a CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl From<KindArg> for TxKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => TxKind::Income,
            KindArg::Expense => TxKind::Expense,
        }
    }
}

/// Year to operate on: the explicit flag, or the most recent year in the
/// ledger (which is the current year when the ledger is empty)
pub(crate) fn resolve_year(ledger: &Ledger, year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| {
        ledger
            .all_years()
            .last()
            .copied()
            .unwrap_or_else(|| chrono::Local::now().date_naive().year())
    })
}

/// Validate an optional month flag (1-12)
pub(crate) fn validate_month(month: Option<u32>) -> TallyResult<Option<u32>> {
    match month {
        Some(m) if !(1..=12).contains(&m) => Err(TallyError::Validation(format!(
            "invalid month {}, expected 1-12",
            m
        ))),
        other => Ok(other),
    }
}
