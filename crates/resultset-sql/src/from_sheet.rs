//! Building definitions from sheets
//!
//! The first row of a sheet names the columns; every following row is a
//! record. Column types come from the first record.

use resultset_core::{CellValue, Sheet, Workbook};
use tracing::debug;

use crate::data_type::DataType;
use crate::definition::{Column, ObjectDefinition, Row};

/// Build a definition from one sheet
///
/// The header runs up to the first blank header cell and the records run
/// up to the first row whose first cell is blank. Returns `None` for a
/// sheet with no cells, no header or no records.
pub fn definition_from_sheet(sheet: &Sheet, index: usize) -> Option<ObjectDefinition> {
    let grid = sheet.cells()?;
    let header = grid.row(0)?;

    let width = header.iter().take_while(|cell| !is_blank(cell)).count();
    if width == 0 {
        return None;
    }

    let records: Vec<&[CellValue]> = grid
        .rows()
        .skip(1)
        .take_while(|row| !is_blank(&row[0]))
        .collect();
    let first = records.first()?;

    let columns = header[..width]
        .iter()
        .zip(first.iter())
        .enumerate()
        .map(|(c, (title, sample))| {
            let fallback = format!("Column{}", c + 1);
            Column::new(identifier(&title.to_string(), &fallback), infer_type(sample))
        })
        .collect();

    let mut definition =
        ObjectDefinition::with_columns(identifier(&sheet.display_name(index), "Sheet"), columns);
    definition.rows = records
        .iter()
        .map(|record| Row::new(record[..width].iter().map(value_text).collect()))
        .collect();

    Some(definition)
}

/// Build one definition per usable sheet, in sheet order
pub fn definitions_from_workbook(workbook: &Workbook) -> Vec<ObjectDefinition> {
    workbook
        .sheets()
        .enumerate()
        .filter_map(|(index, sheet)| {
            let definition = definition_from_sheet(sheet, index);
            if definition.is_none() {
                debug!(sheet = %sheet.display_name(index), "no header or records, skipped");
            }
            definition
        })
        .collect()
}

fn is_blank(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty => true,
        CellValue::String(s) => s.as_str().trim().is_empty(),
        _ => false,
    }
}

fn infer_type(sample: &CellValue) -> DataType {
    match sample {
        CellValue::Number(n)
            if n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64 =>
        {
            DataType::Int32
        }
        CellValue::Number(_) => DataType::Double,
        CellValue::Boolean(_) => DataType::Bool,
        CellValue::DateTime(_) => DataType::DateTime,
        CellValue::Empty | CellValue::String(_) => DataType::String,
    }
}

fn value_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Empty => None,
        CellValue::Boolean(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Turn arbitrary text into an identifier: non-word characters become `_`
/// and a leading digit gets a `_` prefix
fn identifier(text: &str, fallback: &str) -> String {
    let mut ident: String = text
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() {
        return fallback.to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
