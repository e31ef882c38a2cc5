use thiserror::Error;

/// Column headers every input file must carry (after whitespace trimming)
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// Why a transaction file could not be turned into records.
///
/// All variants abort the run; nothing partial is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// One or more required headers are absent
    #[error("CSV must contain columns: {}", REQUIRED_COLUMNS.join(", "))]
    Schema { missing: Vec<String> },

    /// A field in a data row could not be interpreted
    #[error("row {row}: invalid {column} '{value}': {reason}")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
