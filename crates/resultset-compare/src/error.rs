//! Comparison error types

use std::fmt;

use thiserror::Error;

/// Result type for comparison operations
pub type CompareResult<T> = std::result::Result<T, CompareError>;

/// Which input a failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The control (expected) workbook
    Control,
    /// The test (actual) workbook
    Test,
    /// Both workbooks
    Both,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Control => write!(f, "control"),
            Side::Test => write!(f, "test"),
            Side::Both => write!(f, "control and test"),
        }
    }
}

/// Structural problems that stop a comparison before any cell is compared
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// A workbook argument is absent
    #[error("The {0} workbook must be provided")]
    NullInput(Side),

    /// The workbooks have a different number of sheets
    #[error("Workbooks have a different number of sheets (control: {control}, test: {test})")]
    SheetCountMismatch { control: usize, test: usize },

    /// The sheets at the same index have different names
    #[error("Workbooks have different sheet names at index {index} (control: '{control}', test: '{test}')")]
    SheetNameMismatch {
        index: usize,
        control: String,
        test: String,
    },

    /// Only one of the sheets at an index has cells
    #[error("Sheet '{sheet}' at index {index}: control and test sheets must both contain cells ({missing} has none)")]
    CellsPresenceMismatch {
        index: usize,
        sheet: String,
        missing: Side,
    },

    /// The sheets at an index have a different number of rows
    #[error("Sheet '{sheet}' at index {index}: different number of rows (control: {control}, test: {test})")]
    RowCountMismatch {
        index: usize,
        sheet: String,
        control: u32,
        test: u32,
    },

    /// The sheets at an index have a different number of columns
    #[error("Sheet '{sheet}' at index {index}: different number of columns (control: {control}, test: {test})")]
    ColumnCountMismatch {
        index: usize,
        sheet: String,
        control: u16,
        test: u16,
    },
}
