//! # sheetcraft
//!
//! Build spreadsheet workbooks in memory: sheets, styled cells, print
//! layouts, cell comments and charts.
//!
//! ## Features
//!
//! - Sheets with lazily created rows and cells holding text, numbers,
//!   booleans, dates, date-times, rich text or integers
//! - A workbook-wide style registry with four ready-made presets
//! - Print layout: orientation, repeating rows, paper size, page fitting
//! - Cell comments placed on the sheet's drawing
//! - Charts with axes, typed data groups, series from arrays or cell
//!   ranges, legends, trend lines and data labels
//! - A [`Serializer`] boundary that sees the workbook only once it passes
//!   structural validation
//!
//! ## Example
//!
//! ```rust
//! use sheetcraft::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.create_sheet(Some("Report")).unwrap();
//! let header = workbook.styles_mut().bold_with_all_borders("Arial", 10.0);
//!
//! workbook.write_cell(sheet, 0, 0, "Quarter", Some(header)).unwrap();
//! workbook.write_cell(sheet, 0, 1, "Revenue", Some(header)).unwrap();
//! workbook.write_cell(sheet, 1, 0, "Q1", None).unwrap();
//! workbook.write_cell(sheet, 1, 1, 120.0, None).unwrap();
//! workbook.create_comment(sheet, 1, 1, "Preliminary").unwrap();
//!
//! workbook
//!     .configure_print_layout(sheet, PrintLayout::new(true, PaperSize::A4).with_repeating_rows("1:1"))
//!     .unwrap();
//!
//! assert!(sheetcraft::validate(&workbook).is_ok());
//! ```

pub mod charting;
pub mod export;
pub mod prelude;

pub use charting::{
    AxisHandle, ChartDataHandle, ChartHandle, LabelTarget, SeriesHandle, WorkbookChartExt,
};
pub use export::{export, validate, DrawingObject, ExportError, Serializer, ValidationError};

// Re-export core types
pub use sheetcraft_core::{
    // Cell types
    Cell,
    CellAddress,
    CellComment,
    CellRange,
    CellValue,
    RichText,
    RichTextRun,
    RowSpan,

    // Style types
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    CellStyle,
    Color,
    FontStyle,
    HorizontalAlignment,
    StyleId,
    StyleRegistry,
    VerticalAlignment,

    // Print settings
    PageOrientation,
    PageSetup,
    PaperSize,
    PrintLayout,

    // Drawing
    CommentShape,
    Drawing,

    // Error types
    Entity,
    Error,
    Result,

    // Main types
    Row,
    SheetId,
    Workbook,
    WorkbookSettings,
    Worksheet,

    // Constants
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export chart types
pub use sheetcraft_chart::{
    Anchor, Axis, AxisCrossBetween, AxisCrosses, AxisId, AxisOptions, AxisPosition, AxisRole,
    CategoryDataSource, Chart, ChartData, ChartError, ChartType, DataLabels, DataSource, Legend,
    LegendPosition, LineProperties, LineWidth, NumericDataSource, PresetDash, RgbColor, Series,
    SheetRange, TextBody, TextSize, TickMark, TrendLine, TrendLineType,
};
