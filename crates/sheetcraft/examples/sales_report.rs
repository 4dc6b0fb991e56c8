//! Example: build a small sales report with a chart and export it

use sheetcraft::prelude::*;
use sheetcraft::{export, CellRange};

/// Prints a one-line outline per sheet instead of a real file format
struct Outline;

impl Serializer for Outline {
    type Error = std::convert::Infallible;

    fn serialize(&self, workbook: &Workbook) -> std::result::Result<Vec<u8>, Self::Error> {
        let lines: Vec<String> = workbook
            .worksheets()
            .map(|ws| {
                let charts = ws.drawing().map_or(0, |d| d.charts().len());
                format!("{}: {} cells, {} charts", ws.name(), ws.cell_count(), charts)
            })
            .collect();
        Ok(lines.join("\n").into_bytes())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::new();
    workbook.settings_mut().comment_author = "Finance".into();
    let sheet = workbook.create_sheet(Some("Report"))?;

    let header = workbook.styles_mut().bold_with_all_borders("Arial", 10.0);
    let body = workbook.styles_mut().regular_with_all_borders("Arial", 10.0);

    workbook.write_cell(sheet, 0, 0, "Quarter", Some(header))?;
    workbook.write_cell(sheet, 0, 1, "Revenue", Some(header))?;
    for (i, (quarter, revenue)) in [("Q1", 120.0), ("Q2", 95.5), ("Q3", 143.0), ("Q4", 160.25)]
        .into_iter()
        .enumerate()
    {
        let row = i as u32 + 1;
        workbook.write_cell(sheet, row, 0, quarter, Some(body))?;
        workbook.write_cell(sheet, row, 1, revenue, Some(body))?;
    }
    workbook.create_comment(sheet, 4, 1, "Forecast")?;
    workbook.configure_print_layout(
        sheet,
        PrintLayout::new(true, PaperSize::A4)
            .with_repeating_rows("1:1")
            .fit_to(1, 0),
    )?;

    let chart = workbook.create_chart(sheet, Anchor::cells(3, 0, 11, 18), "Revenue", "Arial", 14.0)?;
    let (cat, val) = workbook.create_axis_pair(
        chart,
        AxisOptions::new(AxisPosition::Bottom, TickMark::None, 9.0),
        AxisOptions::new(AxisPosition::Left, TickMark::None, 9.0),
        AxisCrosses::AutoZero,
        AxisCrossBetween::Between,
    )?;
    let data = workbook.bind_chart_data(chart, ChartType::Bar, cat, val)?;
    let series = workbook.add_series_from_range(
        sheet,
        data,
        CellRange::parse("A2:A5")?,
        CellRange::parse("B2:B5")?,
        Some("Revenue"),
    )?;
    workbook.attach_trend_line(
        series,
        TrendLineType::Linear,
        PresetDash::Dash,
        12_700,
        &[0xC0, 0x50, 0x4D],
    )?;
    workbook.set_series_label_flags(LabelTarget::Series(series), DataLabels::values())?;
    workbook.set_legend(chart, LegendPosition::Bottom, 9.0)?;

    let bytes = export(&workbook, &Outline)?;
    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
