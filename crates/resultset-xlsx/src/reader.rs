//! Spreadsheet reader

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use resultset_core::{CellValue, Grid, Sheet, StringPool, Workbook};
use tracing::{debug, trace};

use crate::error::XlsxResult;

/// Spreadsheet file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read a spreadsheet file; the format follows the file extension
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading spreadsheet");
        let mut sheets = open_workbook_auto(path)?;
        Self::read_sheets(&mut sheets)
    }

    /// Read a spreadsheet from memory; the format is sniffed from the content
    pub fn read_bytes(bytes: Vec<u8>) -> XlsxResult<Workbook> {
        let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        Self::read_sheets(&mut sheets)
    }

    /// List the sheet names of a spreadsheet file without converting cells
    pub fn sheet_names<P: AsRef<Path>>(path: P) -> XlsxResult<Vec<String>> {
        let sheets = open_workbook_auto(path.as_ref())?;
        Ok(sheets.sheet_names())
    }

    fn read_sheets<RS: Read + Seek>(sheets: &mut Sheets<RS>) -> XlsxResult<Workbook> {
        let mut pool = StringPool::new();
        let mut workbook = Workbook::new();

        for name in sheets.sheet_names() {
            let range = sheets.worksheet_range(&name)?;
            trace!(sheet = %name, size = ?range.get_size(), "worksheet range");
            workbook.add_sheet(sheet_from_range(name, &range, &mut pool)?)?;
        }

        debug!(sheets = workbook.sheet_count(), "spreadsheet read");
        Ok(workbook)
    }
}

/// Build a sheet from a used range, anchoring the grid at `A1`
fn sheet_from_range(name: String, range: &Range<Data>, pool: &mut StringPool) -> XlsxResult<Sheet> {
    if range.is_empty() {
        return Ok(Sheet::new(name));
    }

    // Range rows are relative to the first used cell
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; col_offset as usize];
        cells.extend(row.iter().map(|value| convert_value(value, pool)));
        rows.push(cells);
    }

    let grid = Grid::from_rows_padded(rows)?;
    Ok(Sheet::with_cells(name, grid))
}

fn convert_value(value: &Data, pool: &mut StringPool) -> CellValue {
    match value {
        Data::Empty => CellValue::Empty,
        Data::Bool(v) => CellValue::Boolean(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(v) => CellValue::String(pool.intern(v)),
        Data::DateTime(v) if v.is_duration() => CellValue::Number(v.as_f64()),
        Data::DateTime(v) => match excel_serial_to_datetime(v.as_f64()) {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Number(v.as_f64()),
        },
        Data::DateTimeIso(v) => match parse_iso_datetime(v) {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::String(pool.intern(v)),
        },
        Data::DurationIso(v) => CellValue::String(pool.intern(v)),
        Data::Error(e) => CellValue::String(pool.intern(e.to_string())),
    }
}

/// Convert a 1900-system serial date (days since 1899-12-30) to a date-time
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::milliseconds(millis))
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
