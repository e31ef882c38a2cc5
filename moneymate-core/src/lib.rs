//! moneymate-core: transaction model, budget table, weekly aggregation and classification

pub mod budget;
pub mod classify;
pub mod finance;
pub mod time;
pub mod weekly;

pub use budget::{BudgetError, BudgetLine, CategoryBudget, format_limit};
pub use classify::{
    ClassificationResult, Overspend, SpendStatus, SummaryRow, TOP_OVERSPENDING, classify,
    summary_rows,
};
pub use finance::Transaction;
pub use weekly::{WeeklySpend, aggregate_week, week_bounds};

/// Everything the presentation layer needs from one pipeline pass
#[derive(Debug, Clone, serde::Serialize)]
pub struct WeeklyReport {
    pub today: chrono::NaiveDate,
    pub week_start: chrono::NaiveDate,
    pub week_end: chrono::NaiveDate,
    pub spend: WeeklySpend,
    pub classification: ClassificationResult,
    pub summary: Vec<SummaryRow>,
}

impl WeeklyReport {
    /// Aggregate and classify `txns` for the ISO week containing `today`.
    pub fn build(txns: &[Transaction], budget: &CategoryBudget, today: chrono::NaiveDate) -> Self {
        let spend = aggregate_week(txns, today);
        let classification = classify(&spend, budget);
        let summary = summary_rows(&spend, budget);
        let (week_start, week_end) = week_bounds(today);

        tracing::info!(
            "week {} .. {}: {} over budget, {} safe",
            week_start,
            week_end,
            classification.overspending.len() + classification.overflow.len(),
            classification.safe.len()
        );

        Self {
            today,
            week_start,
            week_end,
            spend,
            classification,
            summary,
        }
    }
}
