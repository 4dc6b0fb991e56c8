//! Row types

use std::collections::btree_map::{self, BTreeMap};

use crate::cell::Cell;

/// A sheet row and the cells written into it
///
/// Cells are keyed by column and kept in column order. They are created on
/// first write and never removed.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Row index (0-based)
    pub index: u32,
    cells: BTreeMap<u16, Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Get a mutable cell by column index
    pub fn cell_mut(&mut self, col: u16) -> Option<&mut Cell> {
        self.cells.get_mut(&col)
    }

    /// The cell at `col`, created empty if missing
    pub fn get_or_create_cell(&mut self, col: u16) -> &mut Cell {
        self.cells.entry(col).or_default()
    }

    /// Cells in column order
    pub fn cells(&self) -> btree_map::Iter<'_, u16, Cell> {
        self.cells.iter()
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    #[test]
    fn test_cells_in_column_order() {
        let mut row = Row::new(2);
        row.get_or_create_cell(5).value = CellValue::from(5);
        row.get_or_create_cell(1).value = CellValue::from(1);
        row.get_or_create_cell(5);

        let cols: Vec<u16> = row.cells().map(|(c, _)| *c).collect();
        assert_eq!(cols, vec![1, 5]);
        assert_eq!(row.cell(5).map(|c| &c.value), Some(&CellValue::Integer(5)));
        assert!(row.cell(3).is_none());
    }
}
