//! An ordered run of cells sharing one rendered height.

use crate::cell::Cell;

/// A table row. Row 0 of every table is the header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    height: usize,
    is_header: bool,
}

impl Row {
    pub(crate) fn new(cells: Vec<Cell>, is_header: bool) -> Self {
        Row {
            cells,
            height: 1,
            is_header,
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at column `index`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Number of output lines the row occupied in the last render (at least 1).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this is the header row.
    pub fn is_header(&self) -> bool {
        self.is_header
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_has_height_one() {
        let row = Row::new(vec![Cell::new("a"), Cell::new("b")], false);
        assert_eq!(row.height(), 1);
        assert_eq!(row.cells().len(), 2);
        assert!(!row.is_header());
        assert_eq!(row.cell(1).map(Cell::data), Some("b"));
        assert!(row.cell(2).is_none());
    }

    #[test]
    fn height_never_below_one() {
        let mut row = Row::new(vec![Cell::new("a")], true);
        row.set_height(0);
        assert_eq!(row.height(), 1);
        row.set_height(4);
        assert_eq!(row.height(), 4);
    }
}
