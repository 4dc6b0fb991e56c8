//! Cell comments (notes)
//!
//! A comment belongs to the cell it annotates; the sheet's drawing records a
//! comment shape at the comment's anchor so the note box can be laid out.
//!
//! ```rust
//! use sheetcraft_core::CellComment;
//!
//! let comment = CellComment::new("Auditor", "Check this total").with_visible(true);
//! assert_eq!(comment.to_string(), "[Auditor]: Check this total");
//! ```

use std::fmt;

use sheetcraft_chart::Anchor;

/// A cell comment/note
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellComment {
    /// Author of the comment
    pub author: String,
    /// Comment text content
    pub text: String,
    /// Whether the comment box is visible by default
    pub visible: bool,
    /// Placement of the comment box
    pub anchor: Anchor,
}

impl CellComment {
    /// Create a new comment with the given author and text
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set whether the comment is visible by default
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Place the comment box
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Check if this comment has an author
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

impl fmt::Display for CellComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_author() {
            write!(f, "[{}]: {}", self.author, self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}
