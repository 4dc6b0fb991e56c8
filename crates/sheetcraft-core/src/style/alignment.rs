//! Text alignment types

/// Text alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment
    pub vertical: VerticalAlignment,
    /// Wrap text
    pub wrap_text: bool,
}

impl Alignment {
    /// Create an alignment from both axes and the wrap flag
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment, wrap_text: bool) -> Self {
        Self {
            horizontal,
            vertical,
            wrap_text,
        }
    }

    /// Centered on both axes with wrapping, the layout of the header presets
    pub fn centered_wrapped() -> Self {
        Self::new(HorizontalAlignment::Center, VerticalAlignment::Center, true)
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    Left,
    Center,
    Right,
    /// Repeat content to fill cell width
    Fill,
    Justify,
    /// Center across selection
    CenterContinuous,
    Distributed,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}
