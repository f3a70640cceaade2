//! Display formatting for terminal output
//!
//! Formats the ledger's query results as terminal tables.

pub mod totals;
pub mod transaction;

pub use totals::{format_category_totals, format_monthly_totals, format_yearly_totals};
pub use transaction::format_register;

/// English month names, index 0 = January
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
