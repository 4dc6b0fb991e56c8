//! Axis types

use std::fmt;

use crate::text::{RunProperties, TextBody, TextSize};

/// Axis identifier, unique within one chart (`c:axId`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId(pub u32);

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chart axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Axis id
    pub id: AxisId,
    /// Category or value role
    pub role: AxisRole,
    /// Position
    pub position: AxisPosition,
    /// Major tick mark style
    pub major_tick_mark: TickMark,
    /// Id of the perpendicular axis this one crosses
    pub cross_axis: Option<AxisId>,
    /// Tick label text properties
    pub text_properties: Option<TextBody>,
}

impl Axis {
    /// Create a category axis
    pub fn category(id: AxisId, position: AxisPosition) -> Self {
        Self::with_role(id, AxisRole::Category, position)
    }

    /// Create a value axis with default crossing behaviour
    pub fn value(id: AxisId, position: AxisPosition) -> Self {
        Self::with_role(
            id,
            AxisRole::Value {
                crosses: AxisCrosses::default(),
                cross_between: AxisCrossBetween::default(),
            },
            position,
        )
    }

    fn with_role(id: AxisId, role: AxisRole, position: AxisPosition) -> Self {
        Self {
            id,
            role,
            position,
            major_tick_mark: TickMark::default(),
            cross_axis: None,
            text_properties: None,
        }
    }

    /// Whether this is a category axis
    pub fn is_category(&self) -> bool {
        matches!(self.role, AxisRole::Category)
    }

    /// Whether this is a value axis
    pub fn is_value(&self) -> bool {
        matches!(self.role, AxisRole::Value { .. })
    }

    /// Set the major tick mark style
    pub fn set_major_tick_mark(&mut self, mark: TickMark) {
        self.major_tick_mark = mark;
    }

    /// Set where the perpendicular axis crosses (value axes only)
    pub fn set_crosses(&mut self, value: AxisCrosses) {
        if let AxisRole::Value { crosses, .. } = &mut self.role {
            *crosses = value;
        }
    }

    /// Set whether the axis crosses between categories (value axes only)
    pub fn set_cross_between(&mut self, value: AxisCrossBetween) {
        if let AxisRole::Value { cross_between, .. } = &mut self.role {
            *cross_between = value;
        }
    }

    /// Crossing policy, for value axes
    pub fn crosses(&self) -> Option<AxisCrosses> {
        match self.role {
            AxisRole::Value { crosses, .. } => Some(crosses),
            AxisRole::Category => None,
        }
    }

    /// Cross-between policy, for value axes
    pub fn cross_between(&self) -> Option<AxisCrossBetween> {
        match self.role {
            AxisRole::Value { cross_between, .. } => Some(cross_between),
            AxisRole::Category => None,
        }
    }

    /// Get or add the tick label text properties
    pub fn get_or_add_text_properties(&mut self) -> &mut RunProperties {
        let body = self.text_properties.get_or_insert_with(|| {
            let mut body = TextBody::new();
            body.add_body_properties();
            body.add_paragraph();
            body
        });
        if body.paragraphs.is_empty() {
            body.add_paragraph();
        }
        body.paragraphs[0].add_default_run_properties()
    }

    /// Set the tick label font size
    pub fn set_font_size(&mut self, size: TextSize) {
        self.get_or_add_text_properties().set_font_size(size);
    }

    /// Tick label font size in points
    pub fn font_size(&self) -> Option<f64> {
        self.text_properties
            .as_ref()
            .and_then(TextBody::default_font_size)
    }
}

/// What an axis measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    /// Discrete categories (`c:catAx`)
    Category,
    /// Numeric values (`c:valAx`)
    Value {
        /// Where the perpendicular axis crosses this one
        crosses: AxisCrosses,
        /// Whether the axis crosses between categories or on them
        cross_between: AxisCrossBetween,
    },
}

/// Axis position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

/// Tick mark style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickMark {
    Cross,
    In,
    None,
    #[default]
    Out,
}

/// Where the perpendicular axis crosses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisCrosses {
    #[default]
    AutoZero,
    Min,
    Max,
}

/// Whether a value axis crosses between categories or at their midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisCrossBetween {
    #[default]
    Between,
    MidpointCategory,
}

/// Settings applied to a freshly created axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisOptions {
    /// Position
    pub position: AxisPosition,
    /// Major tick mark style
    pub tick_mark: TickMark,
    /// Tick label font size in points
    pub font_size: f64,
}

impl AxisOptions {
    /// Create axis options
    pub fn new(position: AxisPosition, tick_mark: TickMark, font_size: f64) -> Self {
        Self {
            position,
            tick_mark,
            font_size,
        }
    }
}
