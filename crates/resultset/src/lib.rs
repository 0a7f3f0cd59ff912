//! # resultset
//!
//! Tools for checking query result sets exported to spreadsheets:
//!
//! - Compare a control workbook against a test workbook, cell by cell
//! - Parse a `CREATE TABLE #t (...)` / `INSERT INTO #t ...` script into an
//!   object definition and render it as C# class and list code
//! - Render the sheets of a workbook as C# class and list code
//!
//! Workbooks are read from CSV and spreadsheet files (xlsx, xlsm, xlsb,
//! xls, ods). The [`service`] layer wraps each pipeline and reports
//! failures as diagnostics on a [`Response`].
//!
//! ## Example
//!
//! ```rust
//! use resultset::prelude::*;
//!
//! let response = ScriptService::default().parse_to_code(&ScriptRequest::new(
//!     "CREATE TABLE #X (Id INT); INSERT INTO #X (Id) VALUES (1);",
//! ));
//!
//! assert!(response.is_valid());
//! assert!(response.payload().contains("public Int32 Id { get; set; }"));
//! ```

pub mod prelude;
pub mod service;

pub use service::{
    CodeResponse, ComparisonResponse, ComparisonService, ScriptRequest, ScriptService,
    SheetCodeService,
};

// Re-export core types
pub use resultset_core::{
    CellAddress, CellValue, Diagnostic, Error, Grid, Response, Result, SharedString, Sheet,
    StringPool, ValidationDetail, Workbook, MAX_COLS, MAX_ROWS,
};

// Re-export engines
pub use resultset_compare::{
    compare, CompareError, CompareOptions, CompareResult, Comparer, ComparisonFinding,
    ComparisonReport, Side,
};
pub use resultset_sql::{
    class_definition, data_list, definition_from_sheet, definitions_from_workbook, parse_script,
    print, print_all, Column, DataType, InsertPolicy, ObjectDefinition, ParseError, ParseOptions,
    PrintError, PrintKind, Row, ScriptParser,
};

// Re-export I/O types
pub use resultset_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator};
pub use resultset_xlsx::{XlsxError, XlsxReader, SUPPORTED_EXTENSIONS};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file, choosing the reader by extension
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            Some("tsv") => CsvReader::read_file(path, &CsvReadOptions::with_delimiter(b'\t'))
                .map_err(|e| Error::other(e.to_string())),
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext) => {
                XlsxReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
