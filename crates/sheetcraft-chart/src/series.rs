//! Data series types

use crate::labels::DataLabels;
use crate::source::{CategoryDataSource, NumericDataSource};
use crate::trendline::TrendLine;

/// One named curve, bar group or slice of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Series title
    pub title: Option<String>,
    /// Categories (X data)
    pub categories: CategoryDataSource,
    /// Values (Y data)
    pub values: NumericDataSource,
    /// Trend line decoration
    pub trend_line: Option<TrendLine>,
    /// Data label settings
    pub data_labels: Option<DataLabels>,
}

impl Series {
    /// Create a series from its two sources
    pub fn new(categories: CategoryDataSource, values: NumericDataSource) -> Self {
        Self {
            title: None,
            categories,
            values,
            trend_line: None,
            data_labels: None,
        }
    }

    /// Set series title
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = Some(title.into());
    }

    /// Install a trend line, replacing any previous one
    pub fn set_trend_line(&mut self, trend_line: TrendLine) {
        self.trend_line = Some(trend_line);
    }

    /// Set data label flags
    pub fn set_data_labels(&mut self, labels: DataLabels) {
        self.data_labels = Some(labels);
    }

    /// Number of points, taken from the value source
    pub fn point_count(&self) -> usize {
        self.values.point_count()
    }
}
