//! Budget classification: which categories blew their weekly limit, and by how much.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::budget::CategoryBudget;
use crate::weekly::WeeklySpend;

/// Maximum number of over-budget categories surfaced to the advice prompt
pub const TOP_OVERSPENDING: usize = 3;

/// A category whose weekly spend exceeded its limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overspend {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
}

impl Overspend {
    pub fn overage(&self) -> f64 {
        self.spent - self.budget
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Worst offenders first, at most [`TOP_OVERSPENDING`]
    pub overspending: Vec<Overspend>,
    /// Over-budget categories ranked below the cut
    pub overflow: Vec<Overspend>,
    /// Categories at or under budget, in declaration order
    pub safe: Vec<String>,
}

impl ClassificationResult {
    pub fn all_within_budget(&self) -> bool {
        self.overspending.is_empty()
    }
}

/// Partition every budgeted category into over-budget and safe.
///
/// Categories present in `spend` but not in `budget` are ignored. Ties on
/// overage keep declaration order.
pub fn classify(spend: &WeeklySpend, budget: &CategoryBudget) -> ClassificationResult {
    let mut over = Vec::new();
    let mut safe = Vec::new();

    for line in budget.lines() {
        let spent = spend.spent(&line.category);
        if spent > line.limit {
            over.push(Overspend {
                category: line.category.clone(),
                spent,
                budget: line.limit,
            });
        } else {
            safe.push(line.category.clone());
        }
    }

    // sort_by is stable
    over.sort_by(|a, b| b.overage().total_cmp(&a.overage()));
    let overflow = if over.len() > TOP_OVERSPENDING {
        over.split_off(TOP_OVERSPENDING)
    } else {
        Vec::new()
    };

    debug!(
        "classified {} categories: {} over (showing {}), {} safe",
        budget.len(),
        over.len() + overflow.len(),
        over.len(),
        safe.len()
    );

    ClassificationResult {
        overspending: over,
        overflow,
        safe,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendStatus {
    Safe,
    Over,
}

impl fmt::Display for SpendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpendStatus::Safe => write!(f, "safe"),
            SpendStatus::Over => write!(f, "over"),
        }
    }
}

/// One row of the spend-vs-budget table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
    pub status: SpendStatus,
}

/// Spend-vs-budget rows for every budgeted category, in declaration order
pub fn summary_rows(spend: &WeeklySpend, budget: &CategoryBudget) -> Vec<SummaryRow> {
    budget
        .lines()
        .iter()
        .map(|line| {
            let spent = spend.spent(&line.category);
            let status = if spent <= line.limit {
                SpendStatus::Safe
            } else {
                SpendStatus::Over
            };
            SummaryRow {
                category: line.category.clone(),
                spent,
                budget: line.limit,
                status,
            }
        })
        .collect()
}
