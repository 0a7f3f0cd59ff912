//! Comparison engine

use resultset_core::{Grid, Sheet, Workbook};
use tracing::{debug, trace};

use crate::error::{CompareError, CompareResult, Side};
use crate::finding::{ComparisonFinding, ComparisonReport};
use crate::options::CompareOptions;

/// Compare two workbooks with default options
pub fn compare(control: &Workbook, test: &Workbook) -> CompareResult<ComparisonReport> {
    Comparer::default().compare(Some(control), Some(test))
}

/// Workbook comparer
///
/// Holds only options; each call works on its own inputs, so one comparer
/// can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct Comparer {
    options: CompareOptions,
}

impl Comparer {
    /// Create a comparer with options
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare a control workbook against a test workbook
    ///
    /// Every structural precondition is checked for every sheet pair before
    /// any cell is compared. On success the report lists each differing
    /// cell, sheet by sheet in row-major order.
    pub fn compare(
        &self,
        control: Option<&Workbook>,
        test: Option<&Workbook>,
    ) -> CompareResult<ComparisonReport> {
        let (control, test) = Self::require_inputs(control, test)?;
        Self::validate(control, test)?;

        debug!(sheets = control.sheet_count(), "comparing workbooks");

        let mut report = ComparisonReport::default();
        for (index, (control_sheet, test_sheet)) in
            control.sheets().zip(test.sheets()).enumerate()
        {
            let (control_cells, test_cells) = match (control_sheet.cells(), test_sheet.cells()) {
                (Some(c), Some(t)) => (c, t),
                // Validated: both absent, nothing to compare
                _ => continue,
            };

            let sheet_name = control_sheet.display_name(index);
            report.sheets_compared += 1;

            if !self.compare_grids(&sheet_name, control_cells, test_cells, &mut report) {
                report.truncated = true;
                debug!(findings = report.findings.len(), "findings cap reached");
                break;
            }
        }

        debug!(
            findings = report.findings.len(),
            cells = report.cells_compared,
            "comparison finished"
        );
        Ok(report)
    }

    /// Check that two workbooks can be compared cell by cell
    pub fn validate(control: &Workbook, test: &Workbook) -> CompareResult<()> {
        if control.sheet_count() != test.sheet_count() {
            return Err(CompareError::SheetCountMismatch {
                control: control.sheet_count(),
                test: test.sheet_count(),
            });
        }

        for (index, (c, t)) in control.sheets().zip(test.sheets()).enumerate() {
            Self::validate_sheet_pair(index, c, t)?;
        }

        Ok(())
    }

    fn require_inputs<'a>(
        control: Option<&'a Workbook>,
        test: Option<&'a Workbook>,
    ) -> CompareResult<(&'a Workbook, &'a Workbook)> {
        match (control, test) {
            (Some(c), Some(t)) => Ok((c, t)),
            (None, None) => Err(CompareError::NullInput(Side::Both)),
            (None, Some(_)) => Err(CompareError::NullInput(Side::Control)),
            (Some(_), None) => Err(CompareError::NullInput(Side::Test)),
        }
    }

    fn validate_sheet_pair(index: usize, control: &Sheet, test: &Sheet) -> CompareResult<()> {
        if control.name() != test.name() {
            return Err(CompareError::SheetNameMismatch {
                index,
                control: control.display_name(index),
                test: test.display_name(index),
            });
        }

        let sheet = control.display_name(index);
        match (control.dimensions(), test.dimensions()) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(CompareError::CellsPresenceMismatch {
                index,
                sheet,
                missing: Side::Control,
            }),
            (Some(_), None) => Err(CompareError::CellsPresenceMismatch {
                index,
                sheet,
                missing: Side::Test,
            }),
            (Some((control_rows, _)), Some((test_rows, _))) if control_rows != test_rows => {
                Err(CompareError::RowCountMismatch {
                    index,
                    sheet,
                    control: control_rows,
                    test: test_rows,
                })
            }
            (Some((_, control_cols)), Some((_, test_cols))) if control_cols != test_cols => {
                Err(CompareError::ColumnCountMismatch {
                    index,
                    sheet,
                    control: control_cols,
                    test: test_cols,
                })
            }
            _ => Ok(()),
        }
    }

    /// Scan one pair of equally sized grids; returns false once the cap is hit
    fn compare_grids(
        &self,
        sheet_name: &str,
        control: &Grid,
        test: &Grid,
        report: &mut ComparisonReport,
    ) -> bool {
        for ((address, control_value), (_, test_value)) in control.cells().zip(test.cells()) {
            report.cells_compared += 1;

            if control_value == test_value {
                continue;
            }

            if self
                .options
                .max_findings
                .map_or(false, |max| report.findings.len() >= max)
            {
                return false;
            }

            let finding = ComparisonFinding {
                sheet_name: sheet_name.to_string(),
                row: address.row,
                column: address.col,
                control_value: control_value.clone(),
                test_value: test_value.clone(),
            };
            trace!(%finding, "cell differs");
            report.findings.push(finding);
        }

        true
    }
}
