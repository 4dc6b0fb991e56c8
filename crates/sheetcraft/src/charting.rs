//! Handle-based chart and comment construction
//!
//! Charts live on a sheet's drawing, so every chart object is addressed by a
//! small `Copy` handle that records the path to it: sheet, chart, data group,
//! series. A handle that points nowhere yields [`Error::NotFound`].
//!
//! # Example
//!
//! ```rust
//! use sheetcraft::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.create_sheet(Some("Report")).unwrap();
//!
//! let chart = workbook
//!     .create_chart(sheet, Anchor::cells(0, 5, 8, 20), "Sales", "Arial", 14.0)
//!     .unwrap();
//! let (cat, val) = workbook
//!     .create_axis_pair(
//!         chart,
//!         AxisOptions::new(AxisPosition::Bottom, TickMark::None, 9.0),
//!         AxisOptions::new(AxisPosition::Left, TickMark::None, 9.0),
//!         AxisCrosses::AutoZero,
//!         AxisCrossBetween::Between,
//!     )
//!     .unwrap();
//! let data = workbook.bind_chart_data(chart, ChartType::Bar, cat, val).unwrap();
//! let series = workbook
//!     .add_series_from_arrays(data, &["Q1", "Q2"], &[120, 95], Some("Revenue"))
//!     .unwrap();
//!
//! assert_eq!(workbook.series(series).unwrap().point_count(), 2);
//! ```

use sheetcraft_chart::{
    Anchor, AxisCrossBetween, AxisCrosses, AxisId, AxisOptions, CategoryDataSource, Chart,
    ChartData, ChartType, DataLabels, DataSource, LegendPosition, NumericDataSource, PresetDash,
    Series, TextBody, TextSize, TrendLine, TrendLineType,
};
use sheetcraft_core::{CellComment, CellRange, Entity, Error, Result, SheetId, Workbook};

/// A chart on a sheet's drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    pub sheet: SheetId,
    /// Index on the sheet's drawing
    pub index: usize,
}

/// An axis of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisHandle {
    pub chart: ChartHandle,
    pub id: AxisId,
}

/// A chart data group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartDataHandle {
    pub chart: ChartHandle,
    pub index: usize,
}

/// A series of a chart data group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle {
    pub data: ChartDataHandle,
    /// Position in the data group, also the series' `idx`/`order`
    pub index: usize,
}

/// What a set of data label flags applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTarget {
    /// One series
    Series(SeriesHandle),
    /// Every series of a data group
    ChartData(ChartDataHandle),
}

/// Extension trait adding chart and comment construction to [`Workbook`]
///
/// Each method validates all of its input before it changes anything.
pub trait WorkbookChartExt {
    /// Place a new chart on the sheet's drawing and give it a title
    ///
    /// The title's single run carries `title_font` as its latin typeface and
    /// `title_size_pt` as its size.
    fn create_chart(
        &mut self,
        sheet: SheetId,
        anchor: Anchor,
        title: &str,
        title_font: &str,
        title_size_pt: f64,
    ) -> Result<ChartHandle>;

    /// Get a chart
    fn chart(&self, chart: ChartHandle) -> Result<&Chart>;

    /// Get a mutable chart, for settings the handle API does not cover
    fn chart_mut(&mut self, chart: ChartHandle) -> Result<&mut Chart>;

    /// Attach a comment to a cell that already exists
    ///
    /// The note box is placed one column to the right of the cell.
    fn create_comment(&mut self, sheet: SheetId, row: u32, col: u16, text: &str) -> Result<()>;

    /// Create the category axis, then the value axis
    fn create_axis_pair(
        &mut self,
        chart: ChartHandle,
        category: AxisOptions,
        value: AxisOptions,
        crosses: AxisCrosses,
        cross_between: AxisCrossBetween,
    ) -> Result<(AxisHandle, AxisHandle)>;

    /// Bind a chart type to an axis pair of the same chart
    fn bind_chart_data(
        &mut self,
        chart: ChartHandle,
        chart_type: ChartType,
        category_axis: AxisHandle,
        value_axis: AxisHandle,
    ) -> Result<ChartDataHandle>;

    /// Append a series built from literal categories and values
    fn add_series_from_arrays<S, V>(
        &mut self,
        data: ChartDataHandle,
        categories: &[S],
        values: &[V],
        title: Option<&str>,
    ) -> Result<SeriesHandle>
    where
        S: AsRef<str>,
        V: Copy + Into<f64>;

    /// Append a series that references cell ranges on `sheet`
    ///
    /// The ranges are not checked against what the sheet contains.
    fn add_series_from_range(
        &mut self,
        sheet: SheetId,
        data: ChartDataHandle,
        categories: CellRange,
        values: CellRange,
        title: Option<&str>,
    ) -> Result<SeriesHandle>;

    /// Get a series
    fn series(&self, series: SeriesHandle) -> Result<&Series>;

    /// Show the chart's legend at `position` with entries at `font_size_pt`
    fn set_legend(
        &mut self,
        chart: ChartHandle,
        position: LegendPosition,
        font_size_pt: f64,
    ) -> Result<()>;

    /// Install a styled trend line on a series, replacing any previous one
    ///
    /// The equation and R² are never displayed.
    fn attach_trend_line(
        &mut self,
        series: SeriesHandle,
        kind: TrendLineType,
        dash: PresetDash,
        width_emu: i32,
        color: &[u8],
    ) -> Result<()>;

    /// Set the five data label flags on a series or a data group
    fn set_series_label_flags(&mut self, target: LabelTarget, labels: DataLabels) -> Result<()>;
}

impl WorkbookChartExt for Workbook {
    fn create_chart(
        &mut self,
        sheet: SheetId,
        anchor: Anchor,
        title: &str,
        title_font: &str,
        title_size_pt: f64,
    ) -> Result<ChartHandle> {
        self.sheet(sheet)?;
        let size = TextSize::from_points(title_size_pt)?;

        let drawing = self.sheet_mut(sheet)?.drawing_mut();
        let index = drawing.create_chart(anchor);
        let chart = drawing
            .chart_mut(index)
            .ok_or(Error::NotFound(Entity::Chart(index)))?;
        chart.set_title_text(title);
        chart.set_title_font(title_font, size);

        log::debug!("created chart {} '{}' on sheet {}", index, title, sheet);
        Ok(ChartHandle { sheet, index })
    }

    fn chart(&self, chart: ChartHandle) -> Result<&Chart> {
        self.sheet(chart.sheet)?
            .chart(chart.index)
            .ok_or(Error::NotFound(Entity::Chart(chart.index)))
    }

    fn chart_mut(&mut self, chart: ChartHandle) -> Result<&mut Chart> {
        self.sheet_mut(chart.sheet)?.chart_mut(chart.index)
    }

    fn create_comment(&mut self, sheet: SheetId, row: u32, col: u16, text: &str) -> Result<()> {
        let author = self.settings().comment_author.clone();
        let comment = CellComment::new(author, text).with_anchor(Anchor::comment_box(row, col));
        self.sheet_mut(sheet)?.set_comment_at(row, col, comment)?;

        log::debug!("attached comment to ({}, {}) on sheet {}", row, col, sheet);
        Ok(())
    }

    fn create_axis_pair(
        &mut self,
        chart: ChartHandle,
        category: AxisOptions,
        value: AxisOptions,
        crosses: AxisCrosses,
        cross_between: AxisCrossBetween,
    ) -> Result<(AxisHandle, AxisHandle)> {
        let category_size = TextSize::from_points(category.font_size)?;
        let value_size = TextSize::from_points(value.font_size)?;
        let target = self.chart_mut(chart)?;

        let cat_id = target.create_category_axis(category.position);
        let cat_axis = target.axis_mut(cat_id)?;
        cat_axis.set_major_tick_mark(category.tick_mark);
        cat_axis.set_font_size(category_size);

        let val_id = target.create_value_axis(value.position);
        let val_axis = target.axis_mut(val_id)?;
        val_axis.set_crosses(crosses);
        val_axis.set_cross_between(cross_between);
        val_axis.set_major_tick_mark(value.tick_mark);
        val_axis.set_font_size(value_size);

        Ok((
            AxisHandle { chart, id: cat_id },
            AxisHandle { chart, id: val_id },
        ))
    }

    fn bind_chart_data(
        &mut self,
        chart: ChartHandle,
        chart_type: ChartType,
        category_axis: AxisHandle,
        value_axis: AxisHandle,
    ) -> Result<ChartDataHandle> {
        let target = self.chart_mut(chart)?;
        for axis in [category_axis, value_axis] {
            if axis.chart != chart {
                return Err(Error::precondition(format!(
                    "axis {} belongs to chart {} on sheet {}, not chart {} on sheet {}",
                    axis.id, axis.chart.index, axis.chart.sheet, chart.index, chart.sheet
                )));
            }
        }

        let index = target.create_data(chart_type, category_axis.id, value_axis.id)?;
        log::debug!("bound {:?} data {} to chart {}", chart_type, index, chart.index);
        Ok(ChartDataHandle { chart, index })
    }

    fn add_series_from_arrays<S, V>(
        &mut self,
        data: ChartDataHandle,
        categories: &[S],
        values: &[V],
        title: Option<&str>,
    ) -> Result<SeriesHandle>
    where
        S: AsRef<str>,
        V: Copy + Into<f64>,
    {
        let group = data_mut(self, data)?;
        let index = group.add_series(
            CategoryDataSource::from_strings(categories),
            NumericDataSource::from_numbers(values),
            title,
        )?;
        Ok(SeriesHandle { data, index })
    }

    fn add_series_from_range(
        &mut self,
        sheet: SheetId,
        data: ChartDataHandle,
        categories: CellRange,
        values: CellRange,
        title: Option<&str>,
    ) -> Result<SeriesHandle> {
        let name = self.sheet(sheet)?.name().to_string();
        let group = data_mut(self, data)?;
        let index = group.add_series(
            DataSource::Range(categories.on_sheet(&name)),
            DataSource::Range(values.on_sheet(&name)),
            title,
        )?;
        Ok(SeriesHandle { data, index })
    }

    fn series(&self, series: SeriesHandle) -> Result<&Series> {
        let data = series.data;
        self.chart(data.chart)?
            .data_at(data.index)
            .ok_or(Error::NotFound(Entity::ChartData(data.index)))?
            .series_at(series.index)
            .ok_or(Error::NotFound(Entity::Series(series.index)))
    }

    fn set_legend(
        &mut self,
        chart: ChartHandle,
        position: LegendPosition,
        font_size_pt: f64,
    ) -> Result<()> {
        let size = TextSize::from_points(font_size_pt)?;
        let legend = self.chart_mut(chart)?.get_or_add_legend();
        legend.set_position(position);

        // Font size only sticks when set on a body that is then assigned
        let mut body = TextBody::new();
        body.add_body_properties();
        body.add_paragraph()
            .add_default_run_properties()
            .set_font_size(size);
        legend.set_text_body(body);
        Ok(())
    }

    fn attach_trend_line(
        &mut self,
        series: SeriesHandle,
        kind: TrendLineType,
        dash: PresetDash,
        width_emu: i32,
        color: &[u8],
    ) -> Result<()> {
        let trend_line = TrendLine::styled(kind, dash, width_emu, color)?;
        series_mut(self, series)?.set_trend_line(trend_line);
        log::trace!(
            "attached {:?} trend line to series {} of data {}",
            kind,
            series.index,
            series.data.index
        );
        Ok(())
    }

    fn set_series_label_flags(&mut self, target: LabelTarget, labels: DataLabels) -> Result<()> {
        match target {
            LabelTarget::Series(series) => series_mut(self, series)?.set_data_labels(labels),
            LabelTarget::ChartData(data) => data_mut(self, data)?.set_data_labels(labels),
        }
        Ok(())
    }
}

fn data_mut(workbook: &mut Workbook, data: ChartDataHandle) -> Result<&mut ChartData> {
    Ok(workbook.chart_mut(data.chart)?.data_at_mut(data.index)?)
}

fn series_mut(workbook: &mut Workbook, series: SeriesHandle) -> Result<&mut Series> {
    Ok(data_mut(workbook, series.data)?.series_at_mut(series.index)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetcraft_chart::{AxisPosition, TickMark};

    fn workbook_with_chart() -> (Workbook, ChartHandle) {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(Some("Report")).unwrap();
        let chart = wb
            .create_chart(sheet, Anchor::cells(0, 0, 6, 12), "Sales", "Arial", 14.0)
            .unwrap();
        (wb, chart)
    }

    fn axes(wb: &mut Workbook, chart: ChartHandle) -> (AxisHandle, AxisHandle) {
        wb.create_axis_pair(
            chart,
            AxisOptions::new(AxisPosition::Bottom, TickMark::None, 9.0),
            AxisOptions::new(AxisPosition::Left, TickMark::Out, 10.0),
            AxisCrosses::AutoZero,
            AxisCrossBetween::Between,
        )
        .unwrap()
    }

    #[test]
    fn test_create_chart_title() {
        let (wb, chart) = workbook_with_chart();
        let chart = wb.chart(chart).unwrap();
        assert_eq!(chart.title_text().as_deref(), Some("Sales"));
        let props = chart.title().unwrap().paragraphs[0].runs[0]
            .properties
            .as_ref()
            .unwrap();
        assert_eq!(props.size.map(|s| s.hundredths()), Some(1400));
        assert_eq!(props.latin.as_deref(), Some("Arial"));
    }

    #[test]
    fn test_create_chart_bad_size_leaves_canvas_alone() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(None).unwrap();
        let err = wb
            .create_chart(sheet, Anchor::default(), "T", "Arial", 0.0)
            .unwrap_err();
        assert!(err.is_precondition_violation());
        assert!(wb.sheet(sheet).unwrap().drawing().is_none());
    }

    #[test]
    fn test_axis_pair_settings() {
        let (mut wb, chart) = workbook_with_chart();
        let (cat, val) = axes(&mut wb, chart);

        let c = wb.chart(chart).unwrap();
        let cat_axis = c.axis(cat.id).unwrap();
        let val_axis = c.axis(val.id).unwrap();
        assert!(cat_axis.is_category());
        assert_eq!(cat_axis.major_tick_mark, TickMark::None);
        assert_eq!(cat_axis.font_size(), Some(9.0));
        assert!(val_axis.is_value());
        assert_eq!(val_axis.crosses(), Some(AxisCrosses::AutoZero));
        assert_eq!(val_axis.cross_between(), Some(AxisCrossBetween::Between));
        assert_eq!(val_axis.font_size(), Some(10.0));
    }

    #[test]
    fn test_axis_pair_bad_font_size_creates_nothing() {
        let (mut wb, chart) = workbook_with_chart();
        let err = wb
            .create_axis_pair(
                chart,
                AxisOptions::new(AxisPosition::Bottom, TickMark::None, 9.0),
                AxisOptions::new(AxisPosition::Left, TickMark::None, 5000.0),
                AxisCrosses::AutoZero,
                AxisCrossBetween::Between,
            )
            .unwrap_err();
        assert!(err.is_precondition_violation());
        assert!(wb.chart(chart).unwrap().axes().is_empty());
    }

    #[test]
    fn test_legend_bad_font_size_adds_no_legend() {
        let (mut wb, chart) = workbook_with_chart();
        let err = wb
            .set_legend(chart, LegendPosition::Right, 0.5)
            .unwrap_err();
        assert!(err.is_precondition_violation());
        assert!(wb.chart(chart).unwrap().legend().is_none());
    }

    #[test]
    fn test_bind_rejects_swapped_axes() {
        let (mut wb, chart) = workbook_with_chart();
        let (cat, val) = axes(&mut wb, chart);
        let err = wb
            .bind_chart_data(chart, ChartType::Line, val, cat)
            .unwrap_err();
        assert!(err.is_precondition_violation());
        assert!(wb.chart(chart).unwrap().data().is_empty());
    }

    #[test]
    fn test_label_flags_on_group() {
        let (mut wb, chart) = workbook_with_chart();
        let (cat, val) = axes(&mut wb, chart);
        let data = wb.bind_chart_data(chart, ChartType::Pie, cat, val).unwrap();

        let labels = DataLabels {
            show_percent: true,
            show_category_name: true,
            ..DataLabels::hidden()
        };
        wb.set_series_label_flags(LabelTarget::ChartData(data), labels)
            .unwrap();
        let group = wb.chart(chart).unwrap().data_at(data.index).unwrap();
        assert_eq!(group.data_labels, Some(labels));
    }

    #[test]
    fn test_missing_series() {
        let (mut wb, chart) = workbook_with_chart();
        let (cat, val) = axes(&mut wb, chart);
        let data = wb.bind_chart_data(chart, ChartType::Bar, cat, val).unwrap();
        let ghost = SeriesHandle { data, index: 3 };

        assert!(matches!(wb.series(ghost), Err(Error::NotFound(Entity::Series(3)))));
        let err = wb
            .attach_trend_line(ghost, TrendLineType::Linear, PresetDash::Solid, 100, &[0, 0, 0])
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
