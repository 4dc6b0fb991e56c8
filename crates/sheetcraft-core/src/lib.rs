//! # sheetcraft-core
//!
//! Core data structures for the sheetcraft workbook builder.
//!
//! This crate provides the document model the builder fills in:
//! - [`Workbook`], [`Worksheet`], [`Row`] and [`Cell`] - The sheet grid
//! - [`CellValue`] - The seven kinds of cell content
//! - [`CellStyle`] and [`StyleRegistry`] - Fonts, alignment and borders
//! - [`PageSetup`] and [`PrintLayout`] - Print settings
//! - [`Drawing`] - The per-sheet canvas holding charts and comment shapes
//!
//! ## Example
//!
//! ```rust
//! use sheetcraft_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.create_sheet(Some("Report")).unwrap();
//! let header = workbook.styles_mut().bold_with_all_borders("Arial", 10.0);
//!
//! workbook.write_cell(sheet, 0, 0, "Quarter", Some(header)).unwrap();
//! workbook.write_cell(sheet, 1, 0, 3.5, None).unwrap();
//!
//! let ws = workbook.sheet(sheet).unwrap();
//! assert_eq!(ws.value_at(1, 0), &CellValue::Number(3.5));
//! assert!(workbook.cell_style(sheet, 0, 0).unwrap().font.bold);
//! ```

pub mod cell;
pub mod comment;
pub mod drawing;
pub mod error;
pub mod page_setup;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellRange, CellValue, RichText, RichTextRun, RowSpan};
pub use comment::CellComment;
pub use drawing::{CommentShape, Drawing};
pub use error::{Entity, Error, Result};
pub use page_setup::{PageOrientation, PageSetup, PaperSize, PrintLayout};
pub use row::Row;
pub use workbook::{SheetId, Workbook, WorkbookSettings};
pub use worksheet::Worksheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, CellStyle, Color, FontStyle,
    HorizontalAlignment, StyleId, StyleRegistry, VerticalAlignment,
};

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
