//! # resultset-xlsx
//!
//! Reads spreadsheet files (xlsx, xlsm, xlsb, xls, ods) into a
//! [`Workbook`](resultset_core::Workbook) of value grids.
//!
//! Every sheet is kept in workbook order. Grids are anchored at `A1`, so a
//! cell's position in the grid is its position in the file. Sheets with no
//! used cells have no grid.

mod error;
mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;

/// File extensions this crate can read
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
