//! Sheet type

use crate::grid::Grid;

/// A named sheet holding an optional grid of cells
///
/// A sheet without cells is an empty sheet: it keeps its position in the
/// workbook but has nothing to compare.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    /// Sheet name, if the source provided one
    name: Option<String>,
    /// Cell matrix
    cells: Option<Grid>,
}

impl Sheet {
    /// Create an empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            cells: None,
        }
    }

    /// Create a sheet with a name and cells
    pub fn with_cells<S: Into<String>>(name: S, cells: Grid) -> Self {
        Self {
            name: Some(name.into()),
            cells: Some(cells),
        }
    }

    /// Create a sheet with no name
    pub fn unnamed(cells: Option<Grid>) -> Self {
        Self { name: None, cells }
    }

    /// Get the sheet name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    /// Get the sheet name, or `Sheet{index + 1}` when the sheet has none
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Sheet{}", index + 1),
        }
    }

    /// Get the cells, if any
    pub fn cells(&self) -> Option<&Grid> {
        self.cells.as_ref()
    }

    /// Replace the cells
    pub fn set_cells(&mut self, cells: Option<Grid>) {
        self.cells = cells;
    }

    /// Row and column counts, if the sheet has cells
    pub fn dimensions(&self) -> Option<(u32, u16)> {
        self.cells
            .as_ref()
            .map(|g| (g.row_count(), g.column_count()))
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.as_ref().map_or(true, Grid::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Sheet::new("Data").display_name(4), "Data");
        assert_eq!(Sheet::unnamed(None).display_name(0), "Sheet1");
        assert_eq!(Sheet::unnamed(None).display_name(2), "Sheet3");
    }

    #[test]
    fn test_dimensions() {
        let sheet = Sheet::with_cells("A", Grid::new(4, 3));
        assert_eq!(sheet.dimensions(), Some((4, 3)));
        assert!(!sheet.is_empty());

        let empty = Sheet::new("B");
        assert_eq!(empty.dimensions(), None);
        assert!(empty.is_empty());
    }
}
