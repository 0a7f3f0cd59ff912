//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use resultset_core::Sheet;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file, options)
    }

    /// Write a sheet to a writer, one record per grid row
    ///
    /// A sheet without cells writes nothing.
    pub fn write<W: Write>(sheet: &Sheet, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if let Some(grid) = sheet.cells() {
            for row in grid.rows() {
                csv_writer.write_record(row.iter().map(|value| value.to_string()))?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsvReadOptions, CsvReader};
    use resultset_core::{CellValue, Grid};

    fn sheet() -> Sheet {
        let grid = Grid::from_rows(vec![
            vec!["Name".into(), "Note".into()],
            vec!["Ann".into(), "a, b".into()],
            vec![CellValue::Number(1.5), CellValue::Empty],
        ])
        .unwrap();
        Sheet::with_cells("Data", grid)
    }

    #[test]
    fn test_write_quotes_delimiters() {
        let mut out = Vec::new();
        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..CsvWriteOptions::default()
        };
        CsvWriter::write(&sheet(), &mut out, &options).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name,Note\nAnn,\"a, b\"\n1.5,\n"
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvWriter::write_file(&sheet(), &path, &CsvWriteOptions::default()).unwrap();
        let workbook = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();
        let grid = workbook.sheet(0).unwrap().cells().unwrap();

        assert_eq!(grid.get(1, 1), Some(&CellValue::string("a, b")));
        assert_eq!(grid.get(2, 0), Some(&CellValue::Number(1.5)));
    }
}
