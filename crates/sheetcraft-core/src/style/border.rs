//! Border style types

use super::Color;

/// The four edges of a cell border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// No borders
    pub fn none() -> Self {
        Self::default()
    }

    /// The same black line on all four edges
    pub fn all(style: BorderLineStyle) -> Self {
        Self::all_colored(style, Color::BLACK)
    }

    /// The same line and color on all four edges
    pub fn all_colored(style: BorderLineStyle, color: Color) -> Self {
        let edge = BorderEdge::new(style, color).visible();
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
        }
    }

    /// Whether no edge is drawn
    pub fn is_empty(&self) -> bool {
        self.edges().iter().all(Option::is_none)
    }

    /// Edges in left, right, top, bottom order
    pub fn edges(&self) -> [Option<BorderEdge>; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Thin black edge
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }

    // `None` lines are stored as a missing edge
    fn visible(self) -> Option<Self> {
        (self.style != BorderLineStyle::None).then_some(self)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    /// Very thin line
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}
