//! Transaction display formatting
//!
//! Renders the transaction register for a selected year, sorted by date the
//! way the ledger table is meant to be read. Entry ids are shown so a listed
//! row can be deleted by key.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ledger::LedgerEntry;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Party")]
    party: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format a register of ledger entries, sorted by date ascending
///
/// Same-day entries keep ledger storage order.
pub fn format_register(mut entries: Vec<&LedgerEntry>) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    entries.sort_by_key(|e| e.tx.date);

    let rows: Vec<RegisterRow> = entries
        .iter()
        .map(|e| RegisterRow {
            id: e.id.to_string(),
            date: e.tx.date.format("%Y-%m-%d").to_string(),
            kind: e.tx.kind.to_string(),
            amount: e.tx.amount.to_string(),
            party: e.tx.party.clone(),
            category: e.tx.display_category().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
