//! Two-cell anchors for drawing objects

use crate::error::{ChartError, ChartResult};

/// Where a drawing object sits on the sheet grid
///
/// `col1`/`row1` and `col2`/`row2` are the cells holding the top-left and
/// bottom-right corners; `dx`/`dy` are EMU offsets inside those cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    /// X offset inside the from-cell
    pub dx1: i32,
    /// Y offset inside the from-cell
    pub dy1: i32,
    /// X offset inside the to-cell
    pub dx2: i32,
    /// Y offset inside the to-cell
    pub dy2: i32,
    /// From column
    pub col1: u16,
    /// From row
    pub row1: u32,
    /// To column
    pub col2: u16,
    /// To row
    pub row2: u32,
}

impl Anchor {
    /// Create an anchor from the eight coordinates
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dx1: i32,
        dy1: i32,
        dx2: i32,
        dy2: i32,
        col1: u16,
        row1: u32,
        col2: u16,
        row2: u32,
    ) -> Self {
        Self {
            dx1,
            dy1,
            dx2,
            dy2,
            col1,
            row1,
            col2,
            row2,
        }
    }

    /// Anchor spanning whole cells, no offsets
    pub fn cells(col1: u16, row1: u32, col2: u16, row2: u32) -> Self {
        Self {
            col1,
            row1,
            col2,
            row2,
            ..Self::default()
        }
    }

    /// Default placement of a comment box for the cell at `row`, `col`
    ///
    /// Starts one column to the right of the cell, two columns wide and four
    /// rows tall. The to-corner sits at the top-left of `col2`/`row2`.
    pub fn comment_box(row: u32, col: u16) -> Self {
        let col1 = col.saturating_add(1);
        Self::cells(col1, row, col1.saturating_add(2), row.saturating_add(4))
    }

    /// Whether the from-corner is at or before the to-corner on both axes
    pub fn is_ordered(&self) -> bool {
        (self.col1, self.dx1) <= (self.col2, self.dx2)
            && (self.row1, self.dy1) <= (self.row2, self.dy2)
    }

    /// Fail with [`ChartError::InvertedAnchor`] unless [`Anchor::is_ordered`]
    pub fn ensure_ordered(&self) -> ChartResult<()> {
        if self.is_ordered() {
            Ok(())
        } else {
            Err(ChartError::InvertedAnchor)
        }
    }
}
