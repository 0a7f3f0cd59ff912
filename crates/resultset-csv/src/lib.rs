//! # resultset-csv
//!
//! Reads a CSV file as a one-sheet [`Workbook`](resultset_core::Workbook)
//! and writes sheets back out as CSV.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
