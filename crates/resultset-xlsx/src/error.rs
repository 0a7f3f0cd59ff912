//! Spreadsheet reading errors

use thiserror::Error;

/// Result type for spreadsheet reading
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while reading a spreadsheet
#[derive(Debug, Error)]
pub enum XlsxError {
    /// The file could not be decoded
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] resultset_core::Error),
}
