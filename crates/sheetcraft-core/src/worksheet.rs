//! Worksheet type

use std::collections::btree_map::{self, BTreeMap};

use sheetcraft_chart::Chart;

use crate::cell::{Cell, CellAddress, CellValue};
use crate::comment::CellComment;
use crate::drawing::Drawing;
use crate::error::{Entity, Error, Result};
use crate::page_setup::PageSetup;
use crate::row::Row;
use crate::style::StyleId;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Rows and cells come into existence when first written and are never
/// removed. The drawing canvas is created on first use.
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Rows keyed by index
    rows: BTreeMap<u32, Row>,
    /// Print settings
    page_setup: PageSetup,
    /// Charts and comment shapes
    drawing: Option<Drawing>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            page_setup: PageSetup::default(),
            drawing: None,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Rows and cells ===

    /// Get a row by index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.get_mut(&index)
    }

    /// The row at `index`, created empty if missing
    pub fn get_or_create_row(&mut self, index: u32) -> Result<&mut Row> {
        if index >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(index, MAX_ROWS - 1));
        }
        Ok(self.rows.entry(index).or_insert_with(|| Row::new(index)))
    }

    /// Rows in index order
    pub fn rows(&self) -> btree_map::Values<'_, u32, Row> {
        self.rows.values()
    }

    /// Get a cell by position
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row)?.cell(col)
    }

    /// Get a mutable cell by position
    pub fn cell_at_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.rows.get_mut(&row)?.cell_mut(col)
    }

    /// Get a cell by A1 address
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell's value; missing cells read as [`CellValue::Empty`]
    pub fn value_at(&self, row: u32, col: u16) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cell_at(row, col).map_or(EMPTY, |c| &c.value)
    }

    /// Write a value and replace the cell's style, keeping any comment
    pub fn set_cell(
        &mut self,
        row: u32,
        col: u16,
        value: CellValue,
        style: Option<StyleId>,
    ) -> Result<&mut Row> {
        Self::validate_cell_position(row, col)?;
        let row = self.get_or_create_row(row)?;
        let cell = row.get_or_create_cell(col);
        cell.value = value;
        cell.style = style;
        Ok(row)
    }

    /// Set the style of every cell in `from_col..=to_col` on one row
    ///
    /// Missing cells are created empty; existing values are kept. A span
    /// with `from_col > to_col` is empty and touches nothing.
    pub fn style_row_span(
        &mut self,
        row: u32,
        from_col: u16,
        to_col: u16,
        style: Option<StyleId>,
    ) -> Result<()> {
        Self::validate_cell_position(row, from_col.max(to_col))?;
        if from_col > to_col {
            return Ok(());
        }
        let row = self.get_or_create_row(row)?;
        for col in from_col..=to_col {
            row.get_or_create_cell(col).style = style;
        }
        Ok(())
    }

    /// Set the style of the cell in column `col` on every row of
    /// `from_row..=to_row`; an inverted span touches nothing
    pub fn style_column_span(
        &mut self,
        col: u16,
        from_row: u32,
        to_row: u32,
        style: Option<StyleId>,
    ) -> Result<()> {
        Self::validate_cell_position(from_row.max(to_row), col)?;
        for row in from_row..=to_row {
            self.get_or_create_row(row)?.get_or_create_cell(col).style = style;
        }
        Ok(())
    }

    /// Number of cells ever written
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(Row::cell_count).sum()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(Row::is_empty)
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.rows
            .iter()
            .flat_map(|(r, row)| row.cells().map(move |(c, cell)| (*r, *c, cell)))
    }

    fn validate_cell_position(row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }

    // === Comments ===

    /// Attach a comment to an existing cell
    ///
    /// The comment replaces any previous one and its note box is recorded on
    /// the sheet's drawing. Fails with [`Error::NotFound`] when the cell was
    /// never written.
    pub fn set_comment_at(&mut self, row: u32, col: u16, comment: CellComment) -> Result<()> {
        let anchor = comment.anchor;
        let cell = self
            .cell_at_mut(row, col)
            .ok_or(Error::NotFound(Entity::Cell { row, col }))?;
        cell.comment = Some(comment);
        self.drawing_mut().place_comment(row, col, anchor);
        Ok(())
    }

    /// Get the comment on a cell
    pub fn comment_at(&self, row: u32, col: u16) -> Option<&CellComment> {
        self.cell_at(row, col)?.comment.as_ref()
    }

    /// Iterate over all comments with their positions
    pub fn comments(&self) -> impl Iterator<Item = ((u32, u16), &CellComment)> {
        self.iter_cells()
            .filter_map(|(r, c, cell)| cell.comment.as_ref().map(|cm| ((r, c), cm)))
    }

    /// Number of comments on the sheet
    pub fn comment_count(&self) -> usize {
        self.comments().count()
    }

    // === Print settings ===

    pub fn page_setup(&self) -> &PageSetup {
        &self.page_setup
    }

    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.page_setup
    }

    // === Drawing ===

    /// The drawing canvas, if anything was ever placed on it
    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    /// The drawing canvas, created on first use
    pub fn drawing_mut(&mut self) -> &mut Drawing {
        self.drawing.get_or_insert_with(Drawing::new)
    }

    /// Chart by index on the drawing
    pub fn chart(&self, index: usize) -> Option<&Chart> {
        self.drawing.as_ref()?.chart(index)
    }

    /// Mutable chart by index; looking up never creates the canvas
    pub fn chart_mut(&mut self, index: usize) -> Result<&mut Chart> {
        self.drawing
            .as_mut()
            .and_then(|d| d.chart_mut(index))
            .ok_or(Error::NotFound(Entity::Chart(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetcraft_chart::Anchor;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert!(ws.is_empty());
        assert!(ws.drawing().is_none());
    }

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell(0, 0, "Hello".into(), None).unwrap();
        ws.set_cell(0, 1, 42.0.into(), None).unwrap();
        ws.set_cell(0, 2, true.into(), None).unwrap();

        assert_eq!(ws.value_at(0, 0).as_text(), Some("Hello"));
        assert_eq!(ws.value_at(0, 1).as_number(), Some(42.0));
        assert_eq!(ws.value_at(0, 2).as_bool(), Some(true));
        assert!(ws.value_at(9, 9).is_empty());
        assert_eq!(ws.cell("B1").unwrap().map(|c| &c.value), Some(&CellValue::Number(42.0)));
    }

    #[test]
    fn test_set_cell_returns_row() {
        let mut ws = Worksheet::new("Test");
        let row = ws.set_cell(4, 3, "x".into(), None).unwrap();
        assert_eq!(row.index, 4);
        assert_eq!(row.cell_count(), 1);
    }

    #[test]
    fn test_bounds() {
        let mut ws = Worksheet::new("Test");
        assert!(matches!(
            ws.set_cell(MAX_ROWS, 0, CellValue::Empty, None),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            ws.style_row_span(0, 0, MAX_COLS, None),
            Err(Error::ColumnOutOfBounds(..))
        ));
        assert!(ws.is_empty());
    }

    #[test]
    fn test_column_span_creates_every_row() {
        let mut ws = Worksheet::new("Test");
        ws.set_cell(3, 2, "keep".into(), None).unwrap();
        ws.style_column_span(2, 1, 4, Some(StyleId(0))).unwrap();

        for row in 1..=4 {
            assert_eq!(ws.cell_at(row, 2).and_then(|c| c.style), Some(StyleId(0)));
        }
        assert_eq!(ws.value_at(3, 2).as_text(), Some("keep"));
        assert_eq!(ws.cell_count(), 4);
    }

    #[test]
    fn test_inverted_spans_touch_nothing() {
        let mut ws = Worksheet::new("Test");
        ws.style_row_span(0, 5, 2, Some(StyleId(0))).unwrap();
        ws.style_column_span(1, 9, 3, Some(StyleId(0))).unwrap();

        assert_eq!(ws.cell_count(), 0);
        assert!(ws.rows().next().is_none());
    }

    #[test]
    fn test_comment_requires_cell() {
        let mut ws = Worksheet::new("Test");
        let err = ws
            .set_comment_at(1, 1, CellComment::new("a", "b"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(ws.drawing().is_none());

        ws.set_cell(1, 1, 10.into(), None).unwrap();
        ws.set_comment_at(
            1,
            1,
            CellComment::new("a", "b").with_anchor(Anchor::comment_box(1, 1)),
        )
        .unwrap();
        assert_eq!(ws.comment_count(), 1);
        assert_eq!(ws.drawing().map(|d| d.comment_shapes().len()), Some(1));
    }

    #[test]
    fn test_chart_lookup_does_not_create_drawing() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.chart_mut(0).unwrap_err().is_not_found());
        assert!(ws.drawing().is_none());

        let index = ws.drawing_mut().create_chart(Anchor::cells(0, 0, 3, 3));
        assert!(ws.chart_mut(index).is_ok());
        assert!(ws.chart(index + 1).is_none());
    }

    #[test]
    fn test_rewrite_keeps_comment() {
        let mut ws = Worksheet::new("Test");
        ws.set_cell(0, 0, 1.into(), None).unwrap();
        ws.set_comment_at(0, 0, CellComment::new("a", "note")).unwrap();
        ws.set_cell(0, 0, 2.into(), None).unwrap();
        assert_eq!(ws.comment_at(0, 0).map(|c| c.text.as_str()), Some("note"));
    }
}
