//! Transaction records loaded from a statement export

use chrono::{IsoWeek, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single spending or income line as it appeared in the user's CSV
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Calendar date of the transaction
    pub date: NaiveDate,
    /// Free-text description (may be empty)
    pub description: String,
    /// Category label exactly as written in the input
    pub category: String,
    /// Sign is whatever the export used; aggregation only looks at magnitude
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            amount,
        }
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// ISO-8601 week (year + week number) this transaction falls in
    pub fn iso_week(&self) -> IsoWeek {
        use chrono::Datelike;
        self.date.iso_week()
    }
}
