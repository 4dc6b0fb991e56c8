//! The drawing canvas of a worksheet
//!
//! Each sheet has at most one [`Drawing`]. It is created the first time a
//! chart or comment is placed on the sheet and then reused, so every chart
//! and comment shape of a sheet ends up on the same canvas.

use sheetcraft_chart::{Anchor, Chart};

/// Shape that lays out the note box of a cell comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentShape {
    /// Row of the annotated cell
    pub row: u32,
    /// Column of the annotated cell
    pub col: u16,
    /// Placement of the note box
    pub anchor: Anchor,
}

/// Charts and comment shapes of one sheet
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    charts: Vec<Chart>,
    comment_shapes: Vec<CommentShape>,
}

impl Drawing {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new chart at `anchor` and return its index
    pub fn create_chart(&mut self, anchor: Anchor) -> usize {
        self.charts.push(Chart::new(anchor));
        self.charts.len() - 1
    }

    /// Charts in creation order
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn chart(&self, index: usize) -> Option<&Chart> {
        self.charts.get(index)
    }

    pub fn chart_mut(&mut self, index: usize) -> Option<&mut Chart> {
        self.charts.get_mut(index)
    }

    /// Record the note box of the comment on (`row`, `col`)
    ///
    /// A cell has at most one shape; placing a new one replaces the old.
    pub fn place_comment(&mut self, row: u32, col: u16, anchor: Anchor) {
        let shape = CommentShape { row, col, anchor };
        match self
            .comment_shapes
            .iter_mut()
            .find(|s| (s.row, s.col) == (row, col))
        {
            Some(existing) => *existing = shape,
            None => self.comment_shapes.push(shape),
        }
    }

    /// Comment shapes in placement order
    pub fn comment_shapes(&self) -> &[CommentShape] {
        &self.comment_shapes
    }

    /// Whether the canvas holds nothing
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty() && self.comment_shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charts_in_creation_order() {
        let mut drawing = Drawing::new();
        let a = drawing.create_chart(Anchor::cells(0, 0, 4, 4));
        let b = drawing.create_chart(Anchor::cells(5, 0, 9, 4));
        assert_eq!((a, b), (0, 1));
        assert_eq!(drawing.chart(b).map(|c| c.anchor.col1), Some(5));
        assert!(drawing.chart(2).is_none());
    }

    #[test]
    fn test_comment_shape_replaced() {
        let mut drawing = Drawing::new();
        drawing.place_comment(1, 1, Anchor::comment_box(1, 1));
        drawing.place_comment(1, 1, Anchor::cells(0, 0, 1, 1));
        drawing.place_comment(2, 1, Anchor::comment_box(2, 1));

        assert_eq!(drawing.comment_shapes().len(), 2);
        assert_eq!(drawing.comment_shapes()[0].anchor, Anchor::cells(0, 0, 1, 1));
        assert!(!drawing.is_empty());
    }
}
