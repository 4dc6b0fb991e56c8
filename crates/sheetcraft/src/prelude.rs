//! Prelude module - common imports for sheetcraft users
//!
//! ```rust
//! use sheetcraft::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    BorderLineStyle,
    BorderStyle,
    CellStyle,
    Color,
    FontStyle,
    HorizontalAlignment,
    StyleId,
    VerticalAlignment,

    // Cell types
    CellComment,
    CellRange,
    CellValue,
    RichText,

    // Print settings
    PaperSize,
    PrintLayout,

    // Chart types
    Anchor,
    AxisCrossBetween,
    AxisCrosses,
    AxisOptions,
    AxisPosition,
    ChartType,
    DataLabels,
    LegendPosition,
    PresetDash,
    TickMark,
    TrendLineType,

    // Handles
    AxisHandle,
    ChartDataHandle,
    ChartHandle,
    LabelTarget,
    SeriesHandle,

    // Error types
    Error,
    Result,

    // Main types
    SheetId,
    Workbook,
    Worksheet,

    // Extension traits and export
    Serializer,
    WorkbookChartExt,
};
