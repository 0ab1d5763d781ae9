//! # clima-io
//!
//! Read cleaned daily observations from CSV and write the computed tables
//! as CSV and JSON. Missing values are empty CSV fields and JSON `null`, so
//! they stay distinguishable from zero.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, parse_daily_csv, read_daily_csv};
pub use writer::{format_opt, write_csv_records, write_csv_rows, write_json};
