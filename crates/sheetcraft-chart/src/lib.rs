//! # sheetcraft-chart
//!
//! Chart object model for sheetcraft.
//!
//! A [`Chart`] sits at an [`Anchor`] on a sheet drawing. Axes come first,
//! then [`ChartData`] groups bind a [`ChartType`] to a category/value axis
//! pair and collect [`Series`]. Legends, trend lines and text bodies are
//! built as complete sub-objects and then assigned to their owner.
//!
//! ```rust
//! use sheetcraft_chart::{
//!     Anchor, AxisPosition, CategoryDataSource, Chart, ChartType, NumericDataSource,
//! };
//!
//! let mut chart = Chart::new(Anchor::cells(0, 0, 5, 10));
//! chart.set_title_text("Sales");
//!
//! let cat = chart.create_category_axis(AxisPosition::Bottom);
//! let val = chart.create_value_axis(AxisPosition::Left);
//! let data = chart.create_data(ChartType::Bar, cat, val).unwrap();
//!
//! chart
//!     .data_at_mut(data)
//!     .unwrap()
//!     .add_series(
//!         CategoryDataSource::from_strings(&["Q1", "Q2"]),
//!         NumericDataSource::from_numbers(&[10, 20]),
//!         Some("Revenue"),
//!     )
//!     .unwrap();
//! assert_eq!(chart.series_count(), 1);
//! ```

mod anchor;
mod axis;
mod chart;
mod data;
mod error;
mod labels;
mod legend;
mod series;
mod source;
mod text;
mod trendline;

pub use anchor::Anchor;
pub use axis::{
    Axis, AxisCrossBetween, AxisCrosses, AxisId, AxisOptions, AxisPosition, AxisRole, TickMark,
};
pub use chart::Chart;
pub use data::{ChartData, ChartType};
pub use error::{ChartError, ChartResult};
pub use labels::DataLabels;
pub use legend::{Legend, LegendPosition};
pub use series::Series;
pub use source::{CategoryDataSource, DataSource, NumericDataSource, SheetRange};
pub use text::{BodyProperties, Paragraph, RunProperties, TextBody, TextRun, TextSize};
pub use trendline::{
    LineProperties, LineWidth, PresetDash, RgbColor, ShapeProperties, SolidFill, TrendLine,
    TrendLineType,
};
