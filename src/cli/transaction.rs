//! Transaction CLI commands
//!
//! Implements the add/list/delete/years commands. Input validation happens
//! here; only well-formed transactions reach the ledger.

use chrono::{Local, NaiveDate};

use super::{resolve_year, validate_month};
use crate::display::format_register;
use crate::error::{TallyError, TallyResult};
use crate::models::{EntryId, Money, Transaction, TxKind};
use crate::storage::JsonLedgerStore;

/// Record a new transaction and persist the ledger
pub fn handle_add(
    store: &JsonLedgerStore,
    kind: TxKind,
    amount: &str,
    date: Option<&str>,
    party: Option<&str>,
    category: Option<&str>,
) -> TallyResult<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| TallyError::invalid_date(s))?,
        None => Local::now().date_naive(),
    };

    let amount = Money::parse(amount).map_err(|_| TallyError::invalid_amount(amount))?;
    if amount.is_negative() {
        return Err(TallyError::Validation(
            "amount must not be negative; record an expense instead".into(),
        ));
    }

    let tx = Transaction::new(
        date,
        amount,
        party.unwrap_or("").trim(),
        category.unwrap_or("").trim(),
        kind,
    );

    let mut ledger = store.load_or_default();
    let id = ledger.add(tx);
    store.save(&ledger)?;

    println!("Recorded {} {} on {} (entry {})", kind, amount, date, id);
    Ok(())
}

/// List transactions for a year (optionally restricted to one month)
pub fn handle_list(
    store: &JsonLedgerStore,
    year: Option<i32>,
    month: Option<u32>,
) -> TallyResult<()> {
    let month = validate_month(month)?;
    let ledger = store.load_or_default();
    let year = resolve_year(&ledger, year);

    print!("{}", format_register(ledger.for_year_and_month(year, month)));
    Ok(())
}

/// Delete the entry with the given id, as printed by `list`
pub fn handle_delete(store: &JsonLedgerStore, id: u64) -> TallyResult<()> {
    let mut ledger = store.load_or_default();
    let id = EntryId::from_raw(id);

    if ledger.remove(id) {
        store.save(&ledger)?;
        println!("Deleted entry {}", id);
    } else {
        println!("No entry with id {}", id);
    }
    Ok(())
}

/// Print the selectable years
pub fn handle_years(store: &JsonLedgerStore) -> TallyResult<()> {
    let ledger = store.load_or_default();
    for year in ledger.all_years() {
        println!("{}", year);
    }
    Ok(())
}
