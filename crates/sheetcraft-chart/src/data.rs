//! Chart data groups: a chart type bound to a pair of axes

use crate::axis::AxisId;
use crate::error::{ChartError, ChartResult};
use crate::labels::DataLabels;
use crate::series::Series;
use crate::source::{CategoryDataSource, NumericDataSource};

/// Chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Area,
    Area3D,
    Bar,
    Bar3D,
    Doughnut,
    Line,
    Line3D,
    Pie,
    Pie3D,
    Radar,
    Scatter,
    Surface,
    Surface3D,
}

/// A chart type bound to one category axis and one value axis
///
/// Series order is rendering and legend order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Chart type
    pub chart_type: ChartType,
    /// Category axis id
    pub category_axis: AxisId,
    /// Value axis id
    pub value_axis: AxisId,
    /// Series in rendering order
    series: Vec<Series>,
    /// Labels applied to every series of the group
    pub data_labels: Option<DataLabels>,
}

impl ChartData {
    pub(crate) fn new(chart_type: ChartType, category_axis: AxisId, value_axis: AxisId) -> Self {
        Self {
            chart_type,
            category_axis,
            value_axis,
            series: Vec::new(),
            data_labels: None,
        }
    }

    /// Append a titled series and return its index
    pub fn add_series(
        &mut self,
        categories: CategoryDataSource,
        values: NumericDataSource,
        title: Option<&str>,
    ) -> ChartResult<usize> {
        if let (Some(c), Some(v)) = (categories.literal(), values.literal()) {
            if c.len() != v.len() {
                return Err(ChartError::LengthMismatch {
                    categories: c.len(),
                    values: v.len(),
                });
            }
        }

        let mut series = Series::new(categories, values);
        if let Some(title) = title {
            series.set_title(title);
        }
        self.series.push(series);
        log::trace!(
            "Added series {} to {:?} chart data",
            self.series.len() - 1,
            self.chart_type
        );
        Ok(self.series.len() - 1)
    }

    /// All series in order
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Series by index
    pub fn series_at(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Mutable series by index
    pub fn series_at_mut(&mut self, index: usize) -> ChartResult<&mut Series> {
        self.series
            .get_mut(index)
            .ok_or(ChartError::SeriesNotFound(index))
    }

    /// Number of series
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Set labels for the whole group
    pub fn set_data_labels(&mut self, labels: DataLabels) {
        self.data_labels = Some(labels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ChartData {
        ChartData::new(ChartType::Line, AxisId(1), AxisId(2))
    }

    #[test]
    fn test_series_keep_call_order() {
        let mut data = data();
        for name in ["a", "b", "c"] {
            data.add_series(
                CategoryDataSource::from_strings(&["x"]),
                NumericDataSource::from_numbers(&[1.0]),
                Some(name),
            )
            .unwrap();
        }
        let titles: Vec<_> = data.series().iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("a"), Some("b"), Some("c")]);
    }

    #[test]
    fn test_length_mismatch_leaves_group_untouched() {
        let mut data = data();
        let err = data
            .add_series(
                CategoryDataSource::from_strings(&["Q1", "Q2", "Q3"]),
                NumericDataSource::from_numbers(&[1.0, 2.0]),
                None,
            )
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::LengthMismatch {
                categories: 3,
                values: 2
            }
        );
        assert_eq!(data.series_count(), 0);
    }
}
