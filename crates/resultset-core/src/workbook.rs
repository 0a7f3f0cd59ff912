//! Workbook type - an ordered list of sheets

use crate::error::{Error, Result};
use crate::sheet::Sheet;

/// A workbook: sheets in source order
///
/// Sheet order is significant; comparison pairs sheets by index.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create a workbook with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workbook from sheets, keeping their order
    pub fn from_sheets(sheets: Vec<Sheet>) -> Result<Self> {
        let mut workbook = Self::new();
        for sheet in sheets {
            workbook.add_sheet(sheet)?;
        }
        Ok(workbook)
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == Some(name))
    }

    /// Iterate over all sheets in order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Append a sheet and return its index
    ///
    /// Named sheets must be unique (case-insensitive).
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        if let Some(name) = sheet.name() {
            let lower = name.to_lowercase();
            if self
                .sheets
                .iter()
                .filter_map(Sheet::name)
                .any(|existing| existing.to_lowercase() == lower)
            {
                return Err(Error::DuplicateSheetName(name.into()));
            }
        }

        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Remove a sheet by index
    pub fn remove_sheet(&mut self, index: usize) -> Result<Sheet> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        Ok(self.sheets.remove(index))
    }
}
