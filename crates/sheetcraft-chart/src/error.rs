//! Error types for sheetcraft-chart

use thiserror::Error;

use crate::axis::AxisId;

/// Result type alias using [`ChartError`]
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Errors raised while building a chart
///
/// Every variant is reported before the chart is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// No axis with this id exists on the chart
    #[error("Axis {0} not found on chart")]
    AxisNotFound(AxisId),

    /// An axis was passed in a role it was not created for
    #[error("Axis {axis} is not a {expected} axis")]
    AxisRoleMismatch {
        axis: AxisId,
        expected: &'static str,
    },

    /// No chart data group at this index
    #[error("Chart data {0} not found")]
    DataNotFound(usize),

    /// No series at this index
    #[error("Series {0} not found")]
    SeriesNotFound(usize),

    /// Literal categories and values differ in length
    #[error("Series has {categories} categories but {values} values")]
    LengthMismatch { categories: usize, values: usize },

    /// RGB colors are exactly three bytes
    #[error("Invalid RGB color: expected 3 bytes, got {0}")]
    InvalidColor(usize),

    /// Line width outside the DrawingML range
    #[error("Line width {0} EMU out of range (0..={max})", max = crate::trendline::LineWidth::MAX_EMU)]
    InvalidLineWidth(i64),

    /// Font size outside the DrawingML range
    #[error("Font size {0}pt out of range (1..=4000)")]
    InvalidFontSize(f64),

    /// A series without any data points
    #[error("Series {0} has no data points")]
    EmptySeries(usize),

    /// An anchor whose from-corner lies after its to-corner
    #[error("Anchor from-corner lies after its to-corner")]
    InvertedAnchor,
}
