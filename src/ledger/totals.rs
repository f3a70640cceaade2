//! Aggregation over the ledger
//!
//! Derives the monthly, yearly, and category-ranked totals the presentation
//! layer displays. All sums run over exact cent amounts.

use super::Ledger;
use crate::models::{Money, Transaction, TxKind};

/// An aggregation bucket holding income and expense sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of income amounts in the bucket
    pub income: Money,
    /// Sum of expense amounts in the bucket
    pub expense: Money,
}

impl Totals {
    /// Net movement: income minus expense (may be negative)
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    fn absorb(&mut self, tx: &Transaction) {
        match tx.kind {
            TxKind::Income => self.income += tx.amount,
            TxKind::Expense => self.expense += tx.amount,
        }
    }
}

impl Ledger {
    /// Income/expense totals per month of `year`
    ///
    /// Always exactly 12 buckets, index 0 = January, including months with
    /// no transactions.
    pub fn monthly_totals(&self, year: i32) -> [Totals; 12] {
        let mut months = [Totals::default(); 12];
        for entry in self.for_year(year) {
            months[(entry.tx.month() - 1) as usize].absorb(&entry.tx);
        }
        months
    }

    /// Income/expense totals for the whole of `year`
    ///
    /// The sum of the 12 monthly buckets.
    pub fn yearly_totals(&self, year: i32) -> Totals {
        let mut total = Totals::default();
        for bucket in self.monthly_totals(year) {
            total.income += bucket.income;
            total.expense += bucket.expense;
        }
        total
    }

    /// Per-category amount sums for `kind` transactions in `year` (and
    /// `month`, when given), sorted by total descending
    ///
    /// An empty category is bucketed as `"(uncategorized)"`. Ties keep
    /// first-seen order: categories are accumulated in the order they first
    /// appear in the ledger and the descending sort is stable.
    pub fn category_totals(
        &self,
        year: i32,
        kind: TxKind,
        month: Option<u32>,
    ) -> Vec<(String, Money)> {
        let mut buckets: Vec<(String, Money)> = Vec::new();
        for entry in self.for_year_and_month(year, month) {
            if entry.tx.kind != kind {
                continue;
            }
            let label = entry.tx.display_category();
            match buckets.iter_mut().find(|(name, _)| name == label) {
                Some((_, total)) => *total += entry.tx.amount,
                None => buckets.push((label.to_string(), entry.tx.amount)),
            }
        }
        buckets.sort_by(|a, b| b.1.cmp(&a.1));
        buckets
    }
}
