//! Comparison findings and reports

use std::fmt;

use resultset_core::{CellAddress, CellValue, Grid, Sheet};

/// One cell whose control and test values differ
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonFinding {
    /// Name of the sheet (or `Sheet{n}` when the sheet has no name)
    pub sheet_name: String,
    /// 0-based row index
    pub row: u32,
    /// 0-based column index
    pub column: u16,
    /// Value in the control workbook
    pub control_value: CellValue,
    /// Value in the test workbook
    pub test_value: CellValue,
}

impl ComparisonFinding {
    /// The cell address of this finding
    pub fn address(&self) -> CellAddress {
        CellAddress::new(self.row, self.column)
    }
}

impl fmt::Display for ComparisonFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}!{}: control={} test={}",
            self.sheet_name,
            self.address(),
            describe(&self.control_value),
            describe(&self.test_value)
        )
    }
}

fn describe(value: &CellValue) -> String {
    match value {
        CellValue::Empty => "<empty>".into(),
        CellValue::String(s) => format!("{:?}", s.as_str()),
        other => other.to_string(),
    }
}

/// The result of a successful comparison
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport {
    /// Differences in discovery order (sheet, then row-major)
    pub findings: Vec<ComparisonFinding>,
    /// Number of sheet pairs whose cells were scanned
    pub sheets_compared: usize,
    /// Number of cell pairs compared
    pub cells_compared: u64,
    /// Whether the scan stopped at the findings cap
    pub truncated: bool,
}

impl ComparisonReport {
    /// Check if the workbooks were found identical
    pub fn is_identical(&self) -> bool {
        self.findings.is_empty()
    }

    /// Render the findings as a sheet: a header row, then one row per finding
    pub fn to_sheet(&self) -> Sheet {
        let mut rows = Vec::with_capacity(self.findings.len() + 1);
        rows.push(
            ["Sheet", "Row", "Column", "Address", "Control", "Test"]
                .into_iter()
                .map(CellValue::from)
                .collect(),
        );
        for finding in &self.findings {
            rows.push(vec![
                CellValue::from(finding.sheet_name.as_str()),
                CellValue::from(finding.row as i64),
                CellValue::from(finding.column as i64),
                CellValue::from(finding.address().to_string()),
                finding.control_value.clone(),
                finding.test_value.clone(),
            ]);
        }

        // Every row has the header's width
        let grid = Grid::from_rows_padded(rows).unwrap_or_else(|_| Grid::new(0, 0));
        Sheet::with_cells("Findings", grid)
    }
}
