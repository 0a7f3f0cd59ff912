//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use resultset_core::{CellValue, Grid, Sheet, StringPool, Workbook};
use tracing::debug;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a one-sheet workbook
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading csv");
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a one-sheet workbook
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let sheet = Self::read_sheet(reader, options)?;
        Ok(Workbook::from_sheets(vec![sheet])?)
    }

    /// Read CSV from a reader into a sheet
    ///
    /// Short records are padded with empty cells. Input with no records at
    /// all yields a sheet without cells.
    pub fn read_sheet<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut pool = StringPool::new();
        let mut rows: Vec<Vec<CellValue>> = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let detect = options.auto_detect_types && !(options.has_header && rows.is_empty());

            let row = record
                .iter()
                .map(|field| {
                    if detect {
                        Self::detect_type(field, &mut pool)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::String(pool.intern(field))
                    }
                })
                .collect();
            rows.push(row);
        }

        debug!(rows = rows.len(), strings = pool.len(), "csv records read");

        if rows.is_empty() {
            return Ok(Sheet::new(options.sheet_name.clone()));
        }
        let grid = Grid::from_rows_padded(rows)?;
        Ok(Sheet::with_cells(options.sheet_name.clone(), grid))
    }

    /// Detect the type of a field value
    fn detect_type(field: &str, pool: &mut StringPool) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        // Try boolean
        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // Try number; "inf" and "NaN" stay text
        if trimmed.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<f64>() {
                return CellValue::Number(n);
            }
        }

        // Try ISO date / date-time
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CellValue::date(date);
        }
        if let Some(dt) = DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        {
            return CellValue::DateTime(dt);
        }

        // Default to string
        CellValue::String(pool.intern(field))
    }
}
