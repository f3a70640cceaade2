//! CSV Export functionality
//!
//! Exports one year of transactions, sorted by date ascending.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;

/// Export all transactions of `year` as CSV
///
/// Columns are `date,kind,amount,party,category` with the amount formatted
/// to two decimal places. Rows are ordered by date ascending; same-day rows
/// keep ledger storage order. Returns the number of rows written.
pub fn export_year_csv<W: Write>(ledger: &Ledger, year: i32, writer: W) -> TallyResult<usize> {
    let mut rows = ledger.for_year(year);
    rows.sort_by_key(|e| e.tx.date);

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["date", "kind", "amount", "party", "category"])
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for entry in &rows {
        csv_writer
            .write_record([
                entry.tx.date.format("%Y-%m-%d").to_string(),
                entry.tx.kind.to_string(),
                entry.tx.amount.to_string(),
                entry.tx.party.clone(),
                entry.tx.category.clone(),
            ])
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TxKind};
    use chrono::NaiveDate;

    fn tx(date: &str, cents: i64, party: &str, category: &str, kind: TxKind) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            Money::from_cents(cents),
            party,
            category,
            kind,
        )
    }

    #[test]
    fn test_export_sorted_by_date() {
        let mut ledger = Ledger::new();
        ledger.add(tx("2024-02-01", 1000, "Cafe", "Food", TxKind::Expense));
        ledger.add(tx("2024-01-15", 10000, "Acme", "Salary", TxKind::Income));
        ledger.add(tx("2023-12-31", 500, "", "", TxKind::Expense));

        let mut output = Vec::new();
        let count = export_year_csv(&ledger, 2024, &mut output).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,kind,amount,party,category");
        assert_eq!(lines[1], "2024-01-15,income,100.00,Acme,Salary");
        assert_eq!(lines[2], "2024-02-01,expense,10.00,Cafe,Food");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_two_decimal_amounts() {
        let mut ledger = Ledger::new();
        ledger.add(tx("2024-03-05", 5, "", "", TxKind::Expense));

        let mut output = Vec::new();
        export_year_csv(&ledger, 2024, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("2024-03-05,expense,0.05,,"));
    }

    #[test]
    fn test_export_quotes_fields_with_commas() {
        let mut ledger = Ledger::new();
        ledger.add(tx("2024-03-05", 100, "Shop, Inc", "Food", TxKind::Expense));

        let mut output = Vec::new();
        export_year_csv(&ledger, 2024, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Shop, Inc\""));
    }

    #[test]
    fn test_export_empty_year() {
        let ledger = Ledger::new();
        let mut output = Vec::new();
        let count = export_year_csv(&ledger, 2024, &mut output).unwrap();

        assert_eq!(count, 0);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.trim(), "date,kind,amount,party,category");
    }
}
