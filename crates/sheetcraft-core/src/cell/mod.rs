//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The content written into a cell
//! - [`CellAddress`], [`CellRange`] and [`RowSpan`] - Cell locations
//! - [`Cell`] - Content, style handle and comment of one cell
//! - [`RichText`] - Formatted multi-run text

mod address;
mod rich_text;
mod value;

pub use address::{CellAddress, CellRange, RowSpan};
pub use rich_text::{RichText, RichTextRun};
pub use value::CellValue;

use crate::comment::CellComment;
use crate::style::StyleId;

/// A single cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// The cell's content
    pub value: CellValue,
    /// Registered style, if any
    pub style: Option<StyleId>,
    /// Attached comment, if any
    pub comment: Option<CellComment>,
}

impl Cell {
    /// Create a cell holding a value with no style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style: None,
            comment: None,
        }
    }

    /// Whether the cell has a comment
    pub fn has_comment(&self) -> bool {
        self.comment.is_some()
    }
}
