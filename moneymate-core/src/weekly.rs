//! Weekly aggregation: total spend per category for one ISO week.

use chrono::{Datelike, IsoWeek, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::finance::Transaction;

/// Category label → summed absolute amount for a single ISO week.
///
/// Categories without transactions that week are simply absent; use
/// [`WeeklySpend::spent`] to read them as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySpend {
    totals: BTreeMap<String, f64>,
}

impl WeeklySpend {
    pub fn spent(&self, category: &str) -> f64 {
        self.totals.get(category).copied().unwrap_or(0.0)
    }

    pub fn totals(&self) -> &BTreeMap<String, f64> {
        &self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    fn add(&mut self, category: &str, amount: f64) {
        *self.totals.entry(category.to_string()).or_insert(0.0) += amount;
    }
}

impl FromIterator<(String, f64)> for WeeklySpend {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut spend = WeeklySpend::default();
        for (category, amount) in iter {
            spend.add(&category, amount);
        }
        spend
    }
}

/// Sum `|amount|` per category over the transactions sharing `today`'s ISO week.
///
/// The week is matched on (ISO year, week number), so week 1 of one year never
/// picks up week 1 of another.
pub fn aggregate_week(txns: &[Transaction], today: NaiveDate) -> WeeklySpend {
    let week = today.iso_week();
    let mut spend = WeeklySpend::default();
    let mut matched = 0usize;

    for txn in txns.iter().filter(|t| t.iso_week() == week) {
        spend.add(&txn.category, txn.abs_amount());
        matched += 1;
    }

    debug!(
        "week {}-W{:02}: {} of {} transactions, {} categories",
        week.year(),
        week.week(),
        matched,
        txns.len(),
        spend.totals.len()
    );

    spend
}

/// Monday and Sunday bounding `today`'s ISO week
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week: IsoWeek = today.iso_week();
    let monday = NaiveDate::from_isoywd_opt(week.year(), week.week(), chrono::Weekday::Mon)
        .unwrap_or(today);
    let sunday = NaiveDate::from_isoywd_opt(week.year(), week.week(), chrono::Weekday::Sun)
        .unwrap_or(today);
    (monday, sunday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_sums_absolute_amounts_for_current_week() {
        // 2026-02-18 is a Wednesday
        let today = d(2026, 2, 18);
        let txns = vec![
            Transaction::new(d(2026, 2, 16), "Coffee", "Food", -15.0),
            Transaction::new(d(2026, 2, 17), "Coffee", "Food", -40.0),
            Transaction::new(d(2026, 2, 22), "Movie", "Entertainment", -70.0),
            // previous week
            Transaction::new(d(2026, 2, 15), "Groceries", "Food", -200.0),
        ];

        let spend = aggregate_week(&txns, today);
        assert_eq!(spend.spent("Food"), 55.0);
        assert_eq!(spend.spent("Entertainment"), 70.0);
        assert_eq!(spend.totals().len(), 2);
        assert_eq!(spend.spent("Transport"), 0.0);
    }

    #[test]
    fn test_mixed_signs_add_magnitudes() {
        let today = d(2026, 2, 18);
        let txns = vec![
            Transaction::new(today, "Refund", "Misc", 10.0),
            Transaction::new(today, "Charge", "Misc", -25.0),
            Transaction::new(today, "Ticket", "Transport", -20.0),
            Transaction::new(today, "Ticket refund", "Transport", 20.0),
        ];
        let spend = aggregate_week(&txns, today);
        assert_eq!(spend.spent("Misc"), 35.0);
        assert_eq!(spend.spent("Transport"), 40.0);
    }

    #[test]
    fn test_same_week_number_other_year_excluded() {
        // Both dates are ISO week 8, one year apart
        let today = d(2026, 2, 18);
        let txns = vec![Transaction::new(d(2025, 2, 19), "Old", "Food", -99.0)];
        assert_eq!(d(2025, 2, 19).iso_week().week(), today.iso_week().week());

        let spend = aggregate_week(&txns, today);
        assert!(spend.is_empty());
    }

    #[test]
    fn test_year_boundary_week_spans_calendar_years() {
        // ISO 2026-W01 runs Mon 2025-12-29 .. Sun 2026-01-04
        let today = d(2026, 1, 2);
        let txns = vec![
            Transaction::new(d(2025, 12, 29), "NYE", "Entertainment", -30.0),
            Transaction::new(d(2026, 1, 4), "Brunch", "Food", -20.0),
            Transaction::new(d(2025, 12, 28), "Too early", "Food", -500.0),
        ];
        let spend = aggregate_week(&txns, today);
        assert_eq!(spend.spent("Entertainment"), 30.0);
        assert_eq!(spend.spent("Food"), 20.0);
    }

    #[test]
    fn test_empty_input_is_empty_spend() {
        assert!(aggregate_week(&[], d(2026, 2, 18)).is_empty());
    }

    #[test]
    fn test_week_bounds() {
        let (mon, sun) = week_bounds(d(2026, 1, 2));
        assert_eq!(mon, d(2025, 12, 29));
        assert_eq!(sun, d(2026, 1, 4));
    }
}
