//! Object definition model: a schema plus rows

use crate::data_type::DataType;
use crate::error::{PrintError, PrintResult};

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    /// Create a column
    pub fn new<S: Into<String>>(name: S, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// One row of raw literal values, aligned by position with the definition's columns
///
/// `None` is an absent value (SQL `NULL`, or a column the INSERT did not list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub values: Vec<Option<String>>,
}

impl Row {
    /// Create a row from values
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    /// Value at a column position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }
}

/// A table or class: name, ordered columns and ordered rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectDefinition {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl ObjectDefinition {
    /// Create a definition with no columns or rows
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create a definition with columns and no rows
    pub fn with_columns<S: Into<String>>(name: S, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of the first column with this exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// First column with this exact name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value of a named column in a row
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Check if any row lacks a value at a column position
    pub fn has_absent_values(&self, index: usize) -> bool {
        self.rows.iter().any(|row| row.get(index).is_none())
    }

    /// Check that every row holds exactly one value per column
    pub fn check_rows(&self) -> PrintResult<()> {
        let expected = self.columns.len();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.values.len() != expected)
        {
            Some((row, r)) => Err(PrintError::RowShapeMismatch {
                row,
                expected,
                actual: r.values.len(),
            }),
            None => Ok(()),
        }
    }
}
