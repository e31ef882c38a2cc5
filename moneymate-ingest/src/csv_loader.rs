//! Load a transaction CSV into typed records.
//!
//! Expected header (any order, extra columns ignored, whitespace around
//! names trimmed):
//! Date,Description,Category,Amount

use moneymate_core::Transaction;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::parsers::{parse_amount, parse_date};
use crate::types::{LoadError, REQUIRED_COLUMNS, Result};

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    date: usize,
    description: usize,
    category: usize,
    amount: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| find(**c).is_none())
            .map(|c| c.to_string())
            .collect();

        match (find("Date"), find("Description"), find("Category"), find("Amount")) {
            (Some(date), Some(description), Some(category), Some(amount)) => Ok(Self {
                date,
                description,
                category,
                amount,
            }),
            _ => Err(LoadError::Schema { missing }),
        }
    }
}

/// Parse a transaction CSV file.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    let file = File::open(path)?;
    let txns = load_transactions_from_reader(file)?;
    info!("loaded {} transactions from {}", txns.len(), path.display());
    Ok(txns)
}

/// Parse transaction CSV data from any reader. The first row must be the header.
pub fn load_transactions_from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;
    let mut txns = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or("").trim();

        let date_str = field(columns.date);
        let date = parse_date(date_str).ok_or_else(|| LoadError::Parse {
            row,
            column: "Date",
            value: date_str.to_string(),
            reason: if date_str.is_empty() {
                "date is required".to_string()
            } else {
                "not a recognisable calendar date".to_string()
            },
        })?;

        let category = field(columns.category);
        if category.is_empty() {
            return Err(LoadError::Parse {
                row,
                column: "Category",
                value: String::new(),
                reason: "category is required".to_string(),
            });
        }

        let amount_str = field(columns.amount);
        let amount = parse_amount(amount_str).ok_or_else(|| LoadError::Parse {
            row,
            column: "Amount",
            value: amount_str.to_string(),
            reason: "not a number".to_string(),
        })?;

        txns.push(Transaction::new(
            date,
            field(columns.description),
            category,
            amount,
        ));
    }

    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn load(s: &str) -> Result<Vec<Transaction>> {
        load_transactions_from_reader(s.as_bytes())
    }

    #[test]
    fn test_parse_basic() {
        let txns = load(
            "Date,Description,Category,Amount\n\
             2026-02-16,Coffee,Food,-15\n\
             2026-02-17,Movie,Entertainment,-70.00\n",
        )
        .unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
        assert_eq!(txns[0].description, "Coffee");
        assert_eq!(txns[0].category, "Food");
        assert_eq!(txns[0].amount, -15.0);
        assert_eq!(txns[1].amount, -70.0);
    }

    #[test]
    fn test_headers_trimmed_and_reordered() {
        let txns = load(
            " Amount , Category ,Memo, Date ,Description\n\
             12.5,Transport,x,02/16/2026,Bus\n",
        )
        .unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].category, "Transport");
        assert_eq!(txns[0].description, "Bus");
        assert_eq!(txns[0].amount, 12.5);
    }

    #[test]
    fn test_missing_amount_column_is_schema_error() {
        let err = load("Date,Description,Category\n2026-02-16,Coffee,Food\n").unwrap_err();
        match &err {
            LoadError::Schema { missing } => assert_eq!(missing, &vec!["Amount".to_string()]),
            other => panic!("expected schema error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "CSV must contain columns: Date, Description, Category, Amount"
        );
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let err = load("date,description,category,amount\n").unwrap_err();
        match err {
            LoadError::Schema { missing } => assert_eq!(missing.len(), 4),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let err = load(
            "Date,Description,Category,Amount\n\
             2026-02-16,Coffee,Food,-15\n\
             someday,Coffee,Food,-15\n",
        )
        .unwrap_err();
        match err {
            LoadError::Parse { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Date");
                assert_eq!(value, "someday");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_amount_is_parse_error() {
        let err = load("Date,Description,Category,Amount\n2026-02-16,Coffee,Food,lots\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { column: "Amount", .. }));
    }

    #[test]
    fn test_empty_category_is_parse_error() {
        let err = load("Date,Description,Category,Amount\n2026-02-16,Coffee,,-4\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { column: "Category", .. }));
    }

    #[test]
    fn test_blank_rows_and_empty_description() {
        let txns = load(
            "Date,Description,Category,Amount\n\
             2026-02-16,,Misc,-1\n\
             ,,,\n",
        )
        .unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "");
    }

    #[test]
    fn test_header_only() {
        assert!(load("Date,Description,Category,Amount\n").unwrap().is_empty());
    }
}
