//! CLI commands for reports
//!
//! Monthly totals, yearly totals, and the ranked category breakdown.

use clap::Subcommand;

use super::{resolve_year, validate_month, KindArg};
use crate::display::{format_category_totals, format_monthly_totals, format_yearly_totals};
use crate::error::TallyResult;
use crate::storage::JsonLedgerStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense, and net per month of a year (Jan → Dec)
    Monthly {
        /// Year to report on (default: most recent year in the ledger)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Income, expense, and net for a whole year
    Yearly {
        /// Year to report on (default: most recent year in the ledger)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Per-category totals, ranked by amount
    Categories {
        /// Year to report on (default: most recent year in the ledger)
        #[arg(short, long)]
        year: Option<i32>,

        /// Restrict to one month (1-12)
        #[arg(short, long)]
        month: Option<u32>,

        /// Which side of the ledger to break down
        #[arg(short, long, value_enum, default_value_t = KindArg::Expense)]
        kind: KindArg,
    },
}

/// Handle report commands
pub fn handle_report_command(store: &JsonLedgerStore, cmd: ReportCommands) -> TallyResult<()> {
    let ledger = store.load_or_default();

    match cmd {
        ReportCommands::Monthly { year } => {
            let year = resolve_year(&ledger, year);
            println!("Monthly totals for {}", year);
            print!("{}", format_monthly_totals(&ledger.monthly_totals(year)));
        }
        ReportCommands::Yearly { year } => {
            let year = resolve_year(&ledger, year);
            print!("{}", format_yearly_totals(year, &ledger.yearly_totals(year)));
        }
        ReportCommands::Categories { year, month, kind } => {
            let month = validate_month(month)?;
            let year = resolve_year(&ledger, year);
            let kind = kind.into();

            let scope = match month {
                Some(m) => format!("month {} of {}", m, year),
                None => format!("all months of {}", year),
            };
            println!("{} by category, {}", kind, scope);
            print!(
                "{}",
                format_category_totals(&ledger.category_totals(year, kind, month))
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reports_run_on_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(dir.path().join("ledger.json"));

        handle_report_command(&store, ReportCommands::Monthly { year: None }).unwrap();
        handle_report_command(&store, ReportCommands::Yearly { year: Some(2024) }).unwrap();
        handle_report_command(
            &store,
            ReportCommands::Categories {
                year: None,
                month: None,
                kind: KindArg::Expense,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_categories_rejects_bad_month() {
        let dir = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(dir.path().join("ledger.json"));

        let result = handle_report_command(
            &store,
            ReportCommands::Categories {
                year: Some(2024),
                month: Some(0),
                kind: KindArg::Expense,
            },
        );
        assert!(result.is_err());
    }
}
