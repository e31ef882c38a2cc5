//! Field-level parsers shared by the CSV loader.

pub mod amount;
pub mod date;

pub use amount::parse_amount;
pub use date::parse_date;
