//! Weekly per-category budget table.
//!
//! The table is built once at startup (defaults or user config) and handed to
//! the classifier by reference. Declaration order is significant: it is the
//! iteration order for classification, the tie-break order for overages, and
//! the row order of the summary table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One category and its weekly limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    pub limit: f64,
}

impl BudgetLine {
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    #[error("budget table is empty")]
    Empty,

    #[error("budget category name must not be blank")]
    BlankCategory,

    #[error("duplicate budget category: {0}")]
    Duplicate(String),

    #[error("invalid limit {limit} for category '{category}': must be a finite, non-negative number")]
    InvalidLimit { category: String, limit: f64 },
}

/// Ordered, validated category → weekly limit mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudget {
    lines: Vec<BudgetLine>,
}

impl CategoryBudget {
    /// Validate and freeze a budget table.
    pub fn new(lines: Vec<BudgetLine>) -> Result<Self, BudgetError> {
        if lines.is_empty() {
            return Err(BudgetError::Empty);
        }

        for (i, line) in lines.iter().enumerate() {
            if line.category.trim().is_empty() {
                return Err(BudgetError::BlankCategory);
            }
            if !line.limit.is_finite() || line.limit < 0.0 {
                return Err(BudgetError::InvalidLimit {
                    category: line.category.clone(),
                    limit: line.limit,
                });
            }
            if lines[..i].iter().any(|l| l.category == line.category) {
                return Err(BudgetError::Duplicate(line.category.clone()));
            }
        }

        Ok(Self { lines })
    }

    /// The five weekly defaults
    pub fn default_lines() -> Vec<BudgetLine> {
        vec![
            BudgetLine::new("Food", 100.0),
            BudgetLine::new("Entertainment", 60.0),
            BudgetLine::new("Transport", 50.0),
            BudgetLine::new("Subscriptions", 50.0),
            BudgetLine::new("Misc", 50.0),
        ]
    }

    pub fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.category.as_str())
    }

    pub fn limit(&self, category: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.limit)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for CategoryBudget {
    fn default() -> Self {
        Self {
            lines: Self::default_lines(),
        }
    }
}

/// Render a money amount the way budgets are quoted to the user:
/// whole amounts without cents (`100`), anything else with two decimals.
pub fn format_limit(limit: f64) -> String {
    if limit.fract() == 0.0 {
        format!("{limit:.0}")
    } else {
        format!("{:.2}", limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_and_limits() {
        let budget = CategoryBudget::default();
        let names: Vec<_> = budget.categories().collect();
        assert_eq!(
            names,
            vec!["Food", "Entertainment", "Transport", "Subscriptions", "Misc"]
        );
        assert_eq!(budget.limit("Food"), Some(100.0));
        assert_eq!(budget.limit("Entertainment"), Some(60.0));
        assert_eq!(budget.limit("Rent"), None);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = CategoryBudget::new(vec![
            BudgetLine::new("Food", 10.0),
            BudgetLine::new("Food", 20.0),
        ])
        .unwrap_err();
        assert_eq!(err, BudgetError::Duplicate("Food".to_string()));
    }

    #[test]
    fn test_rejects_bad_limits() {
        assert!(matches!(
            CategoryBudget::new(vec![BudgetLine::new("Food", -1.0)]),
            Err(BudgetError::InvalidLimit { .. })
        ));
        assert!(matches!(
            CategoryBudget::new(vec![BudgetLine::new("Food", f64::NAN)]),
            Err(BudgetError::InvalidLimit { .. })
        ));
        assert_eq!(CategoryBudget::new(vec![]), Err(BudgetError::Empty));
        assert_eq!(
            CategoryBudget::new(vec![BudgetLine::new("  ", 5.0)]),
            Err(BudgetError::BlankCategory)
        );
    }

    #[test]
    fn test_format_limit() {
        assert_eq!(format_limit(100.0), "100");
        assert_eq!(format_limit(0.0), "0");
        assert_eq!(format_limit(42.5), "42.50");
        assert_eq!(format_limit(1e20), "100000000000000000000");
    }
}
