//! # resultset-core
//!
//! Core data structures shared by the resultset-interpreter crates.
//!
//! This crate provides:
//! - [`CellValue`] - A scalar cell value (empty, boolean, number, string, date-time)
//! - [`CellAddress`] - A cell's location (e.g., "B3")
//! - [`Grid`] - A rectangular matrix of cell values
//! - [`Sheet`], [`Workbook`] - Named grids in source order
//! - [`Response`], [`Diagnostic`] - The envelope every pipeline reports through
//!
//! ## Example
//!
//! ```rust
//! use resultset_core::{CellValue, Grid, Sheet, Workbook};
//!
//! let mut grid = Grid::new(2, 2);
//! grid.set(0, 0, "Id").unwrap();
//! grid.set(1, 0, 42.0).unwrap();
//!
//! let mut workbook = Workbook::new();
//! workbook.add_sheet(Sheet::with_cells("Users", grid)).unwrap();
//!
//! let sheet = workbook.sheet(0).unwrap();
//! assert_eq!(sheet.cells().unwrap().get(1, 0), Some(&CellValue::Number(42.0)));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod response;
pub mod sheet;
pub mod workbook;

// Re-exports for convenience
pub use cell::{CellAddress, CellValue, SharedString, StringPool};
pub use error::{Error, Result};
pub use grid::Grid;
pub use response::{Diagnostic, Response, ValidationDetail};
pub use sheet::Sheet;
pub use workbook::Workbook;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
