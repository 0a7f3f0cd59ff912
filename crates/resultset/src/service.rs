//! Request handlers
//!
//! Each service runs one pipeline and never fails outright: engine and I/O
//! errors become [`Diagnostic`]s on the returned [`Response`], and an
//! invalid response always carries an empty payload.

use std::path::Path;

use resultset_compare::{CompareError, CompareOptions, Comparer, ComparisonReport, Side};
use resultset_core::{Diagnostic, Response, ValidationDetail, Workbook};
use resultset_sql::{
    definitions_from_workbook, print, print_all, ObjectDefinition, ParseOptions, PrintKind,
    ScriptParser,
};
use tracing::{debug, info, warn};

use crate::WorkbookExt;

/// Response of a comparison request
pub type ComparisonResponse = Response<ComparisonReport>;

/// Response of a code generation request
pub type CodeResponse = Response<String>;

/// Compares control and test workbooks
#[derive(Debug, Clone, Default)]
pub struct ComparisonService {
    comparer: Comparer,
}

impl ComparisonService {
    /// Create a service with comparison options
    pub fn new(options: CompareOptions) -> Self {
        Self {
            comparer: Comparer::new(options),
        }
    }

    /// Compare two loaded workbooks
    pub fn compare_workbooks(
        &self,
        control: Option<&Workbook>,
        test: Option<&Workbook>,
    ) -> ComparisonResponse {
        match self.comparer.compare(control, test) {
            Ok(report) => {
                info!(
                    findings = report.findings.len(),
                    truncated = report.truncated,
                    "comparison complete"
                );
                Response::ok(report)
            }
            Err(CompareError::NullInput(side)) => {
                warn!(%side, "comparison input missing");
                Response::failed(Diagnostic::validation(missing_inputs(side)))
            }
            Err(e) => {
                warn!(error = %e, "comparison rejected");
                Response::failed(Diagnostic::new(e.to_string()))
            }
        }
    }

    /// Load two workbook files and compare them
    ///
    /// Both files are loaded before reporting, so one response can name
    /// both unreadable inputs.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        control: P,
        test: Q,
    ) -> ComparisonResponse {
        let control = Workbook::open(control.as_ref());
        let test = Workbook::open(test.as_ref());

        match (control, test) {
            (Ok(control), Ok(test)) => self.compare_workbooks(Some(&control), Some(&test)),
            (control, test) => {
                let details = [("control", control.err()), ("test", test.err())]
                    .into_iter()
                    .filter_map(|(member, error)| {
                        error.map(|e| ValidationDetail::new(member, e.to_string()))
                    })
                    .collect::<Vec<_>>();
                warn!(failures = details.len(), "could not load workbooks");
                Response::failed(Diagnostic::validation(details))
            }
        }
    }
}

fn missing_inputs(side: Side) -> Vec<ValidationDetail> {
    let members: &[&str] = match side {
        Side::Control => &["control"],
        Side::Test => &["test"],
        Side::Both => &["control", "test"],
    };
    members
        .iter()
        .map(|member| ValidationDetail::new(*member, "workbook is required"))
        .collect()
}

/// A script to turn into code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptRequest {
    pub script: String,
    pub print_kind: PrintKind,
}

impl ScriptRequest {
    /// Request both the class and the data blocks for a script
    pub fn new<S: Into<String>>(script: S) -> Self {
        Self {
            script: script.into(),
            print_kind: PrintKind::default(),
        }
    }

    /// Choose which blocks to render
    pub fn with_print_kind(mut self, print_kind: PrintKind) -> Self {
        self.print_kind = print_kind;
        self
    }
}

/// Parses `CREATE TABLE` / `INSERT INTO` scripts
#[derive(Debug, Clone, Default)]
pub struct ScriptService {
    parser: ScriptParser,
}

impl ScriptService {
    /// Create a service with parse options
    pub fn new(options: ParseOptions) -> Self {
        Self {
            parser: ScriptParser::new(options),
        }
    }

    /// Parse a script into a definition
    pub fn parse(&self, script: &str) -> Response<ObjectDefinition> {
        if script.trim().is_empty() {
            return Response::failed(Diagnostic::validation(vec![ValidationDetail::new(
                "script",
                "script is required",
            )]));
        }

        let response = Response::from_result(self.parser.parse(script));
        if let Some(diagnostic) = response.diagnostics().first() {
            warn!(%diagnostic, "script rejected");
        }
        response
    }

    /// Parse a script and render the requested code blocks
    pub fn parse_to_code(&self, request: &ScriptRequest) -> CodeResponse {
        let parsed = self.parse(&request.script);
        if !parsed.is_valid() {
            return parsed.map(|_| String::new());
        }

        let definition = parsed.into_payload();
        debug!(table = %definition.name, rows = definition.rows.len(), "rendering script");
        Response::from_result(print(&definition, request.print_kind))
    }
}

/// Renders workbook sheets as code, one class per sheet
#[derive(Debug, Clone, Default)]
pub struct SheetCodeService {
    print_kind: PrintKind,
}

impl SheetCodeService {
    /// Create a service rendering the given blocks
    pub fn new(print_kind: PrintKind) -> Self {
        Self { print_kind }
    }

    /// Render every sheet that has a header row and at least one record
    pub fn workbook_to_code(&self, workbook: &Workbook) -> CodeResponse {
        let definitions = definitions_from_workbook(workbook);
        if definitions.is_empty() {
            return Response::failed(Diagnostic::new(
                "Workbook has no sheet with a header row and data",
            ));
        }

        debug!(classes = definitions.len(), "rendering sheets");
        Response::from_result(print_all(&definitions, self.print_kind))
    }

    /// Load a workbook file and render its sheets
    pub fn file_to_code<P: AsRef<Path>>(&self, path: P) -> CodeResponse {
        match Workbook::open(path.as_ref()) {
            Ok(workbook) => self.workbook_to_code(&workbook),
            Err(e) => Response::failed(Diagnostic::validation(vec![ValidationDetail::new(
                "workbook",
                e.to_string(),
            )])),
        }
    }
}
