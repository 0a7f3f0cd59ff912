//! # resultset-compare
//!
//! Positional, cell-by-cell comparison of two workbooks.
//!
//! The control and test workbooks are validated for structural equivalence
//! first (same sheet count, same sheet names in the same order, same grid
//! dimensions). Only when every sheet pair passes is any cell compared, so a
//! comparison either fails with a single [`CompareError`] or returns the full
//! list of differences.
//!
//! ## Example
//!
//! ```rust
//! use resultset_compare::compare;
//! use resultset_core::{Grid, Sheet, Workbook};
//!
//! let mut control = Grid::new(1, 2);
//! control.set(0, 0, 1.0).unwrap();
//! let mut test = control.clone();
//! test.set(0, 1, "changed").unwrap();
//!
//! let control = Workbook::from_sheets(vec![Sheet::with_cells("Data", control)]).unwrap();
//! let test = Workbook::from_sheets(vec![Sheet::with_cells("Data", test)]).unwrap();
//!
//! let report = compare(&control, &test).unwrap();
//! assert_eq!(report.findings.len(), 1);
//! assert_eq!(report.findings[0].address().to_string(), "B1");
//! ```

mod engine;
mod error;
mod finding;
mod options;

pub use engine::{compare, Comparer};
pub use error::{CompareError, CompareResult, Side};
pub use finding::{ComparisonFinding, ComparisonReport};
pub use options::CompareOptions;
