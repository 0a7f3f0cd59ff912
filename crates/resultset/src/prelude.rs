//! Prelude module - common imports for resultset users
//!
//! ```rust
//! use resultset::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    CellAddress,
    Grid,
    Sheet,
    Workbook,
    // Extension traits
    WorkbookExt,

    // Comparison
    CompareOptions,
    Comparer,
    ComparisonFinding,
    ComparisonReport,

    // Scripts and code
    DataType,
    ObjectDefinition,
    ParseOptions,
    PrintKind,

    // Services
    ComparisonService,
    ScriptRequest,
    ScriptService,
    SheetCodeService,
    Diagnostic,
    Response,

    // I/O types
    CsvReader,
    CsvWriter,
    XlsxReader,

    // Error types
    Error,
    Result,
};
