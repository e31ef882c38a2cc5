//! moneymate-ingest: transaction CSV loading with schema and field validation.

pub mod csv_loader;
pub mod parsers;
pub mod types;

pub use csv_loader::{load_transactions, load_transactions_from_reader};
pub use types::{LoadError, REQUIRED_COLUMNS};
