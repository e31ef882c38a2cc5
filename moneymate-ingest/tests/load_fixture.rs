use chrono::NaiveDate;
use moneymate_ingest::{LoadError, load_transactions};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_file() {
    let txns = load_transactions(fixture_path("transactions.csv")).expect("fixture should parse");
    assert_eq!(txns.len(), 10);

    let first = &txns[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
    assert_eq!(first.description, "Grocery run");
    assert_eq!(first.category, "Food");
    assert_eq!(first.amount, -64.20);

    let paycheck = txns.iter().find(|t| t.category == "Income").unwrap();
    assert_eq!(paycheck.amount, 2400.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_transactions(fixture_path("does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
