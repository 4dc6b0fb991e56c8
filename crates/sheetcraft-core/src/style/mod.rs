//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`CellStyle`] - Complete cell style
//! - [`FontStyle`] - Font settings
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation
//! - [`StyleRegistry`] - Workbook-wide store addressed by [`StyleId`]

mod alignment;
mod border;
mod color;
mod font;
mod registry;

use std::fmt;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use font::FontStyle;
pub use registry::StyleRegistry;

/// Handle of a style registered in a workbook's [`StyleRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub(crate) u32);

impl StyleId {
    /// Position in the registry
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete cell style
///
/// A style is a value: once registered it is never mutated, cells switch
/// styles by pointing at a different [`StyleId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    /// Font settings
    pub font: FontStyle,
    /// Text alignment
    pub alignment: Alignment,
    /// Border settings
    pub border: BorderStyle,
}

impl CellStyle {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Style from its three parts; a `None` border leaves all edges empty
    pub fn from_parts(font: FontStyle, alignment: Alignment, border: Option<BorderLineStyle>) -> Self {
        Self {
            font,
            alignment,
            border: border.map(BorderStyle::all).unwrap_or_default(),
        }
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = name.into();
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }

    /// Draw the same line on all four edges
    pub fn border(mut self, line: BorderLineStyle) -> Self {
        self.border = BorderStyle::all(line);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let style = CellStyle::from_parts(
            FontStyle::named("Arial", 10.0).with_bold(true),
            Alignment::centered_wrapped(),
            Some(BorderLineStyle::Thin),
        );
        assert!(style.font.bold);
        assert_eq!(style.font.name, "Arial");
        assert_eq!(style.border, BorderStyle::all(BorderLineStyle::Thin));

        let plain = CellStyle::from_parts(FontStyle::new(), Alignment::default(), None);
        assert!(plain.border.is_empty());
    }

    #[test]
    fn test_builder_matches_from_parts() {
        let built = CellStyle::new()
            .font_name("Arial")
            .font_size(10.0)
            .bold(true)
            .horizontal_alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Center)
            .wrap_text(true)
            .border(BorderLineStyle::Thin);
        let parts = CellStyle::from_parts(
            FontStyle::named("Arial", 10.0).with_bold(true),
            Alignment::centered_wrapped(),
            Some(BorderLineStyle::Thin),
        );
        assert_eq!(built, parts);
    }
}
