//! Chart definition

use crate::anchor::Anchor;
use crate::axis::{Axis, AxisId, AxisPosition};
use crate::data::{ChartData, ChartType};
use crate::error::{ChartError, ChartResult};
use crate::legend::{Legend, LegendPosition};
use crate::text::{RunProperties, TextBody, TextSize};

/// A chart placed on a sheet's drawing
///
/// Axes are created first; chart data groups are then bound to an existing
/// category/value axis pair and receive series.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Position anchor
    pub anchor: Anchor,
    /// Chart title
    title: Option<TextBody>,
    /// Axes in creation order
    axes: Vec<Axis>,
    /// Chart data groups in creation order
    data: Vec<ChartData>,
    /// Legend
    legend: Option<Legend>,
}

impl Chart {
    /// Create an empty chart at the given anchor
    pub fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            title: None,
            axes: Vec::new(),
            data: Vec::new(),
            legend: None,
        }
    }

    // === Title ===

    /// Set the title text, replacing any previous title
    pub fn set_title_text<S: Into<String>>(&mut self, text: S) {
        self.title = Some(TextBody::plain(text));
    }

    /// Set the title font on the title's first run
    ///
    /// Does nothing when the chart has no title.
    pub fn set_title_font<S: Into<String>>(&mut self, typeface: S, size: TextSize) {
        let run = self
            .title
            .as_mut()
            .and_then(|body| body.paragraphs.first_mut())
            .and_then(|p| p.runs.first_mut());
        if let Some(run) = run {
            let props = run.properties.get_or_insert_with(RunProperties::new);
            props.set_font_size(size);
            props.set_latin(typeface);
        }
    }

    /// Title text, if any
    pub fn title_text(&self) -> Option<String> {
        self.title.as_ref().map(TextBody::text)
    }

    /// Title text body, if any
    pub fn title(&self) -> Option<&TextBody> {
        self.title.as_ref()
    }

    // === Axes ===

    /// Create a category axis
    pub fn create_category_axis(&mut self, position: AxisPosition) -> AxisId {
        let id = self.next_axis_id();
        self.axes.push(Axis::category(id, position));
        id
    }

    /// Create a value axis
    pub fn create_value_axis(&mut self, position: AxisPosition) -> AxisId {
        let id = self.next_axis_id();
        self.axes.push(Axis::value(id, position));
        id
    }

    fn next_axis_id(&self) -> AxisId {
        AxisId(self.axes.len() as u32 + 1)
    }

    /// All axes
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis by id
    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    /// Mutable axis by id
    pub fn axis_mut(&mut self, id: AxisId) -> ChartResult<&mut Axis> {
        self.axes
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ChartError::AxisNotFound(id))
    }

    // === Data ===

    /// Bind a chart type to an existing category/value axis pair
    ///
    /// Returns the index of the new, empty data group. The two axes are
    /// linked as each other's cross axis.
    pub fn create_data(
        &mut self,
        chart_type: ChartType,
        category_axis: AxisId,
        value_axis: AxisId,
    ) -> ChartResult<usize> {
        self.check_axis_role(category_axis, true)?;
        self.check_axis_role(value_axis, false)?;

        self.axis_mut(category_axis)?.cross_axis = Some(value_axis);
        self.axis_mut(value_axis)?.cross_axis = Some(category_axis);

        self.data
            .push(ChartData::new(chart_type, category_axis, value_axis));
        Ok(self.data.len() - 1)
    }

    fn check_axis_role(&self, id: AxisId, category: bool) -> ChartResult<()> {
        let axis = self.axis(id).ok_or(ChartError::AxisNotFound(id))?;
        match (category, axis.is_category()) {
            (true, false) => Err(ChartError::AxisRoleMismatch {
                axis: id,
                expected: "category",
            }),
            (false, true) => Err(ChartError::AxisRoleMismatch {
                axis: id,
                expected: "value",
            }),
            _ => Ok(()),
        }
    }

    /// All data groups
    pub fn data(&self) -> &[ChartData] {
        &self.data
    }

    /// Data group by index
    pub fn data_at(&self, index: usize) -> Option<&ChartData> {
        self.data.get(index)
    }

    /// Mutable data group by index
    pub fn data_at_mut(&mut self, index: usize) -> ChartResult<&mut ChartData> {
        self.data
            .get_mut(index)
            .ok_or(ChartError::DataNotFound(index))
    }

    /// Total number of series across all data groups
    pub fn series_count(&self) -> usize {
        self.data.iter().map(ChartData::series_count).sum()
    }

    // === Legend ===

    /// Get the legend, adding one at the default position if missing
    pub fn get_or_add_legend(&mut self) -> &mut Legend {
        self.legend
            .get_or_insert_with(|| Legend::new(LegendPosition::default()))
    }

    /// Legend, if any
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    // === Validation ===

    /// Check the structure a serializer relies on
    pub fn validate(&self) -> ChartResult<()> {
        self.anchor.ensure_ordered()?;
        for data in &self.data {
            self.check_axis_role(data.category_axis, true)?;
            self.check_axis_role(data.value_axis, false)?;
            for (index, series) in data.series().iter().enumerate() {
                if series.point_count() == 0 {
                    return Err(ChartError::EmptySeries(index));
                }
                if let (Some(c), Some(v)) = (series.categories.literal(), series.values.literal())
                {
                    if c.len() != v.len() {
                        return Err(ChartError::LengthMismatch {
                            categories: c.len(),
                            values: v.len(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
