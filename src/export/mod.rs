//! Export module for tally-cli
//!
//! CSV export of a year's transactions, spreadsheet-compatible.

pub mod csv;

pub use csv::export_year_csv;
