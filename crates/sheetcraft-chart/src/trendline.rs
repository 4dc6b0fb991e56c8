//! Trend lines and the line styling they carry

use crate::error::{ChartError, ChartResult};

/// Fitting model of a trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendLineType {
    Exponential,
    #[default]
    Linear,
    Logarithmic,
    MovingAverage,
    Polynomial,
    Power,
}

/// Preset dash patterns (`a:prstDash`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetDash {
    #[default]
    Solid,
    Dot,
    Dash,
    LargeDash,
    DashDot,
    LargeDashDot,
    LargeDashDotDot,
    SystemDash,
    SystemDot,
    SystemDashDot,
    SystemDashDotDot,
}

/// A 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor(pub [u8; 3]);

impl RgbColor {
    /// Build from a byte slice; anything but three bytes is rejected
    pub fn from_slice(bytes: &[u8]) -> ChartResult<Self> {
        <[u8; 3]>::try_from(bytes)
            .map(RgbColor)
            .map_err(|_| ChartError::InvalidColor(bytes.len()))
    }

    /// Hex form without `#`, e.g. `FF0000`
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

/// Line width in EMU (`ST_LineWidth`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineWidth(i32);

impl LineWidth {
    /// Upper bound of `ST_LineWidth`
    pub const MAX_EMU: i32 = 20_116_800;

    /// EMU per point
    pub const EMU_PER_POINT: i32 = 12_700;

    /// Create a width from EMU
    pub fn new(emu: i32) -> ChartResult<Self> {
        if (0..=Self::MAX_EMU).contains(&emu) {
            Ok(Self(emu))
        } else {
            Err(ChartError::InvalidLineWidth(emu as i64))
        }
    }

    /// Create a width from points
    pub fn from_points(points: f64) -> ChartResult<Self> {
        let emu = (points * Self::EMU_PER_POINT as f64).round();
        if !emu.is_finite() || emu < 0.0 || emu > Self::MAX_EMU as f64 {
            return Err(ChartError::InvalidLineWidth(emu as i64));
        }
        Ok(Self(emu as i32))
    }

    /// Width in EMU
    pub fn emu(&self) -> i32 {
        self.0
    }

    /// Width in points
    pub fn points(&self) -> f64 {
        self.0 as f64 / Self::EMU_PER_POINT as f64
    }
}

/// Solid fill of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidFill {
    /// Fill color
    pub color: RgbColor,
}

/// Line formatting (`a:ln`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineProperties {
    /// Dash pattern
    pub dash: Option<PresetDash>,
    /// Stroke width
    pub width: Option<LineWidth>,
    /// Stroke fill
    pub fill: Option<SolidFill>,
}

impl LineProperties {
    /// Create empty line properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dash pattern
    pub fn set_dash(&mut self, dash: PresetDash) {
        self.dash = Some(dash);
    }

    /// Bind a width constructed beforehand
    pub fn set_width(&mut self, width: LineWidth) {
        self.width = Some(width);
    }

    /// Add a solid fill with the given color
    pub fn add_solid_fill(&mut self, color: RgbColor) -> &mut SolidFill {
        self.fill.insert(SolidFill { color })
    }
}

/// Shape formatting (`c:spPr`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeProperties {
    /// Outline
    pub line: Option<LineProperties>,
}

impl ShapeProperties {
    /// Get or add the line properties
    pub fn add_line(&mut self) -> &mut LineProperties {
        self.line.get_or_insert_with(LineProperties::new)
    }
}

/// A fitted line drawn over a series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendLine {
    /// Fitting model
    pub kind: TrendLineType,
    /// Line styling
    pub shape_properties: Option<ShapeProperties>,
    /// Show the fitted equation on the chart
    pub display_equation: bool,
    /// Show R² on the chart
    pub display_r_squared: bool,
}

impl TrendLine {
    /// Create a trend line of the given kind
    pub fn new(kind: TrendLineType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Build a styled trend line with equation and R² hidden
    ///
    /// Color and width are validated before anything is built.
    pub fn styled(
        kind: TrendLineType,
        dash: PresetDash,
        width_emu: i32,
        color: &[u8],
    ) -> ChartResult<Self> {
        let color = RgbColor::from_slice(color)?;
        let width = LineWidth::new(width_emu)?;

        let mut trend_line = Self::new(kind);
        let line = trend_line.add_shape_properties().add_line();
        line.set_dash(dash);
        line.set_width(width);
        line.add_solid_fill(color);
        trend_line.display_equation = false;
        trend_line.display_r_squared = false;
        Ok(trend_line)
    }

    /// Get or add the shape properties
    pub fn add_shape_properties(&mut self) -> &mut ShapeProperties {
        self.shape_properties
            .get_or_insert_with(ShapeProperties::default)
    }

    /// Line properties, if any were set
    pub fn line(&self) -> Option<&LineProperties> {
        self.shape_properties.as_ref().and_then(|sp| sp.line.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_color() {
        let color = RgbColor::from_slice(&[0xFF, 0x80, 0x00]).unwrap();
        assert_eq!(color.to_hex(), "FF8000");
        assert_eq!(
            RgbColor::from_slice(&[1, 2]),
            Err(ChartError::InvalidColor(2))
        );
        assert_eq!(
            RgbColor::from_slice(&[1, 2, 3, 4]),
            Err(ChartError::InvalidColor(4))
        );
    }

    #[test]
    fn test_line_width_bounds() {
        assert_eq!(LineWidth::new(0).unwrap().emu(), 0);
        assert!(LineWidth::new(LineWidth::MAX_EMU).is_ok());
        assert!(LineWidth::new(LineWidth::MAX_EMU + 1).is_err());
        assert!(LineWidth::new(-1).is_err());
        assert_eq!(LineWidth::from_points(2.0).unwrap().emu(), 25_400);
    }

    #[test]
    fn test_styled_trend_line() {
        let tl = TrendLine::styled(
            TrendLineType::MovingAverage,
            PresetDash::SystemDash,
            12_700,
            &[0x11, 0x22, 0x33],
        )
        .unwrap();

        assert_eq!(tl.kind, TrendLineType::MovingAverage);
        let line = tl.line().unwrap();
        assert_eq!(line.dash, Some(PresetDash::SystemDash));
        assert_eq!(line.width.map(|w| w.points()), Some(1.0));
        assert_eq!(line.fill.unwrap().color.to_hex(), "112233");
        assert!(!tl.display_equation);
        assert!(!tl.display_r_squared);
    }

    #[test]
    fn test_styled_rejects_bad_input() {
        assert!(TrendLine::styled(TrendLineType::Linear, PresetDash::Dot, 100, &[1]).is_err());
        assert!(TrendLine::styled(TrendLineType::Linear, PresetDash::Dot, -5, &[1, 2, 3]).is_err());
    }
}
