//! Rectangular cell matrix

use crate::cell::{CellAddress, CellValue};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A dense, rectangular matrix of cell values
///
/// The row and column counts are fixed at construction; every slot in
/// `rows x columns` is addressable and holds [`CellValue::Empty`] until set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: u32,
    cols: u16,
    /// Row-major cell values, `rows * cols` long
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create a grid of the given size filled with empty cells
    ///
    /// Sizes beyond the Excel limits are clamped to [`MAX_ROWS`] x [`MAX_COLS`].
    pub fn new(rows: u32, cols: u16) -> Self {
        let rows = rows.min(MAX_ROWS);
        let cols = cols.min(MAX_COLS);
        Self {
            rows,
            cols,
            cells: vec![CellValue::Empty; rows as usize * cols as usize],
        }
    }

    /// Build a grid from rows that must all have the same width
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::RaggedRow {
                row: index,
                expected: width,
                actual: row.len(),
            });
        }
        Self::from_rows_padded(rows)
    }

    /// Build a grid from rows of any width, padding short rows with empty cells
    pub fn from_rows_padded(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.len() > MAX_ROWS as usize {
            return Err(Error::RowOutOfBounds(rows.len() as u32, MAX_ROWS - 1));
        }
        if width > MAX_COLS as usize {
            return Err(Error::ColumnOutOfBounds(width as u32, MAX_COLS - 1));
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * width);
        for mut row in rows {
            row.resize(width, CellValue::Empty);
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count as u32,
            cols: width as u16,
            cells,
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> u16 {
        self.cols
    }

    /// Total number of cells (`rows * columns`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the value at a position, or `None` when out of bounds
    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Get the value at an A1-style address
    pub fn value(&self, address: &str) -> Result<Option<&CellValue>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get(addr.row, addr.col))
    }

    /// Set the value at a position
    pub fn set<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        let i = self.checked_index(row, col)?;
        self.cells[i] = value.into();
        Ok(())
    }

    /// Set the value at an A1-style address
    pub fn set_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set(addr.row, addr.col, value)
    }

    /// Get one row as a slice
    pub fn row(&self, row: u32) -> Option<&[CellValue]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        (0..self.rows).filter_map(move |r| self.row(r))
    }

    /// Iterate over every cell in row-major order with its position
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &CellValue)> {
        let cols = self.cols.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, value)| {
            let address = CellAddress::new((i / cols) as u32, (i % cols) as u16);
            (address, value)
        })
    }

    fn index(&self, row: u32, col: u16) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, row: u32, col: u16) -> Result<usize> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(row, self.rows.saturating_sub(1)));
        }
        self.index(row, col)
            .ok_or_else(|| Error::ColumnOutOfBounds(col as u32, self.cols.saturating_sub(1)))
    }
}
