//! rsi - result set interpreter
//!
//! Compares spreadsheet result sets and generates C# class and list code
//! from SQL scripts or sheets.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use resultset::prelude::*;
use resultset::XlsxReader;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use output::{write_code, write_report, ReportFormat};

/// Exit status when the workbooks differ
const EXIT_DIFFERENCES: u8 = 1;
/// Exit status when a request is rejected
const EXIT_DIAGNOSTICS: u8 = 2;

#[derive(Parser)]
#[command(name = "rsi")]
#[command(
    author,
    version,
    about = "Compare result set workbooks and generate class code from scripts or sheets"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a control workbook against a test workbook cell by cell
    Compare {
        /// Control workbook (csv, tsv, xlsx, xlsm, xlsb, xls, ods)
        control: PathBuf,

        /// Test workbook
        test: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Stop after this many findings
        #[arg(short, long)]
        max_findings: Option<usize>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate class and list code from a CREATE TABLE / INSERT INTO script
    #[command(alias = "script")]
    Codegen {
        /// Script file, or `-` for stdin (default: stdin)
        input: Option<PathBuf>,

        /// Which code blocks to print
        #[arg(short, long, value_enum, default_value = "both")]
        print: PrintArg,

        /// Ignore an INSERT statement that targets another table
        #[arg(long)]
        tolerant: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate class and list code from the sheets of a workbook
    SheetCodegen {
        /// Input workbook
        input: PathBuf,

        /// Which code blocks to print
        #[arg(short, long, value_enum, default_value = "both")]
        print: PrintArg,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input workbook
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrintArg {
    Class,
    Data,
    Both,
}

impl From<PrintArg> for PrintKind {
    fn from(arg: PrintArg) -> Self {
        match arg {
            PrintArg::Class => PrintKind::ClassDefinition,
            PrintArg::Data => PrintKind::Data,
            PrintArg::Both => PrintKind::ClassDefinitionAndData,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compare {
            control,
            test,
            format,
            max_findings,
            output,
        } => compare(&control, &test, format, max_findings, output.as_deref()),
        Commands::Codegen {
            input,
            print,
            tolerant,
            output,
        } => codegen(input.as_deref(), print.into(), tolerant, output.as_deref()),
        Commands::SheetCodegen {
            input,
            print,
            output,
        } => sheet_codegen(&input, print.into(), output.as_deref()),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn compare(
    control: &Path,
    test: &Path,
    format: ReportFormat,
    max_findings: Option<usize>,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let options = CompareOptions { max_findings };
    let response = ComparisonService::new(options).compare_files(control, test);

    write_report(&response, format, output)?;

    if !response.is_valid() {
        report_diagnostics(response.diagnostics());
        return Ok(ExitCode::from(EXIT_DIAGNOSTICS));
    }
    if response.payload().is_identical() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_DIFFERENCES))
    }
}

fn codegen(
    input: Option<&Path>,
    print_kind: PrintKind,
    tolerant: bool,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let script = read_script(input)?;
    let options = if tolerant {
        ParseOptions::tolerant()
    } else {
        ParseOptions::default()
    };

    let request = ScriptRequest {
        script,
        print_kind,
    };
    let response = ScriptService::new(options).parse_to_code(&request);
    finish_code(response, output)
}

fn sheet_codegen(input: &Path, print_kind: PrintKind, output: Option<&Path>) -> Result<ExitCode> {
    let response = SheetCodeService::new(print_kind).file_to_code(input);
    finish_code(response, output)
}

fn finish_code(response: Response<String>, output: Option<&Path>) -> Result<ExitCode> {
    if !response.is_valid() {
        report_diagnostics(response.diagnostics());
        return Ok(ExitCode::from(EXIT_DIAGNOSTICS));
    }
    write_code(response.payload(), output)?;
    Ok(ExitCode::SUCCESS)
}

fn read_script(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            debug!("reading script from stdin");
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn list_sheets(input: &Path) -> Result<ExitCode> {
    let is_csv = input
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("tsv"));

    let names: Vec<String> = if is_csv {
        let workbook = Workbook::open(input)
            .with_context(|| format!("Failed to open '{}'", input.display()))?;
        workbook
            .sheets()
            .enumerate()
            .map(|(i, sheet)| sheet.display_name(i))
            .collect()
    } else {
        XlsxReader::sheet_names(input)
            .with_context(|| format!("Failed to open '{}'", input.display()))?
    };

    for (i, name) in names.iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(ExitCode::SUCCESS)
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("error: {}", diagnostic.message);
        for detail in &diagnostic.validation {
            match &detail.member {
                Some(member) => eprintln!("  {}: {}", member, detail.message),
                None => eprintln!("  {}", detail.message),
            }
        }
    }
}
