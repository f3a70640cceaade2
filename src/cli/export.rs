//! CLI commands for data export
//!
//! Writes one year of transactions to a CSV file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::resolve_year;
use crate::error::{TallyError, TallyResult};
use crate::export::export_year_csv;
use crate::storage::JsonLedgerStore;

/// Export a year of transactions to `output` as CSV
///
/// When the year has no transactions, nothing is written and the caller is
/// told so.
pub fn handle_export(
    store: &JsonLedgerStore,
    output: &Path,
    year: Option<i32>,
) -> TallyResult<()> {
    let ledger = store.load_or_default();
    let year = resolve_year(&ledger, year);

    if ledger.for_year(year).is_empty() {
        println!("No transactions for {}.", year);
        return Ok(());
    }

    let file = File::create(output).map_err(|e| {
        TallyError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let count = export_year_csv(&ledger, year, BufWriter::new(file))?;

    println!(
        "Exported {} transactions to {}",
        count,
        output.display()
    );
    Ok(())
}
