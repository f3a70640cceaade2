//! Totals display formatting
//!
//! Renders the monthly totals table, the yearly summary, and the ranked
//! category breakdown with each category's percentage share.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::MONTH_NAMES;
use crate::ledger::Totals;
use crate::models::Money;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Format the 12 monthly buckets of a year (Jan → Dec)
pub fn format_monthly_totals(months: &[Totals; 12]) -> String {
    let rows: Vec<MonthRow> = months
        .iter()
        .zip(MONTH_NAMES)
        .map(|(bucket, name)| MonthRow {
            month: name,
            income: bucket.income.to_string(),
            expense: bucket.expense.to_string(),
            net: bucket.net().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the yearly summary line
pub fn format_yearly_totals(year: i32, totals: &Totals) -> String {
    format!(
        "{}: income {}  expense {}  net {}\n",
        year,
        totals.income,
        totals.expense,
        totals.net()
    )
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format ranked category totals with each category's share of the sum
pub fn format_category_totals(totals: &[(String, Money)]) -> String {
    if totals.is_empty() {
        return "No matching transactions.\n".to_string();
    }

    let grand_total: Money = totals.iter().map(|(_, amount)| *amount).sum();

    let rows: Vec<CategoryRow> = totals
        .iter()
        .map(|(category, amount)| {
            let share = if grand_total.is_zero() {
                0.0
            } else {
                amount.cents() as f64 / grand_total.cents() as f64 * 100.0
            };
            CategoryRow {
                category: category.clone(),
                total: amount.to_string(),
                share: format!("{:.1}%", share),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_table_has_twelve_rows() {
        let months = [Totals::default(); 12];
        let output = format_monthly_totals(&months);
        for name in MONTH_NAMES {
            assert!(output.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_yearly_summary() {
        let totals = Totals {
            income: Money::from_cents(10000),
            expense: Money::from_cents(5000),
        };
        let output = format_yearly_totals(2024, &totals);
        assert_eq!(output, "2024: income 100.00  expense 50.00  net 50.00\n");
    }

    #[test]
    fn test_category_breakdown_shares() {
        let totals = vec![
            ("Rent".to_string(), Money::from_cents(7500)),
            ("Food".to_string(), Money::from_cents(2500)),
        ];
        let output = format_category_totals(&totals);
        assert!(output.contains("Rent"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("25.0%"));
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert_eq!(format_category_totals(&[]), "No matching transactions.\n");
    }
}
