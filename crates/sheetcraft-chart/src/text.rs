//! Rich text bodies used by titles, legends and axis labels
//!
//! DrawingML stores text formatting in a small tree: a body holds body
//! properties and paragraphs, a paragraph holds default run properties and
//! runs. A body is built completely and then assigned to its owner.

use crate::error::{ChartError, ChartResult};

/// A text size stored the way DrawingML does, in hundredths of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextSize(u32);

impl TextSize {
    /// Smallest size DrawingML accepts (1pt)
    pub const MIN: u32 = 100;
    /// Largest size DrawingML accepts (4000pt)
    pub const MAX: u32 = 400_000;

    /// Create from points (e.g., `9.0` becomes `900`)
    pub fn from_points(points: f64) -> ChartResult<Self> {
        let raw = (points * 100.0).round();
        if !raw.is_finite() || raw < Self::MIN as f64 || raw > Self::MAX as f64 {
            return Err(ChartError::InvalidFontSize(points));
        }
        Ok(Self(raw as u32))
    }

    /// Size in points
    pub fn points(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Raw `sz` attribute value
    pub fn hundredths(&self) -> u32 {
        self.0
    }
}

/// Character-level formatting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunProperties {
    /// Font size
    pub size: Option<TextSize>,
    /// Latin typeface name
    pub latin: Option<String>,
}

impl RunProperties {
    /// Create empty run properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size
    pub fn set_font_size(&mut self, size: TextSize) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Set the latin typeface
    pub fn set_latin<S: Into<String>>(&mut self, typeface: S) -> &mut Self {
        self.latin = Some(typeface.into());
        self
    }

    /// Font size in points, if set
    pub fn font_size(&self) -> Option<f64> {
        self.size.map(|s| s.points())
    }
}

/// A run of text with its formatting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    /// Run text
    pub text: String,
    /// Run formatting
    pub properties: Option<RunProperties>,
}

/// A paragraph of a text body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    /// Formatting applied to runs without their own properties
    pub default_run_properties: Option<RunProperties>,
    /// Text runs
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Get or add the default run properties
    pub fn add_default_run_properties(&mut self) -> &mut RunProperties {
        self.default_run_properties
            .get_or_insert_with(RunProperties::new)
    }

    /// Append a run and return it
    pub fn add_run<S: Into<String>>(&mut self, text: S) -> &mut TextRun {
        self.runs.push(TextRun {
            text: text.into(),
            properties: None,
        });
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Body-level properties (`a:bodyPr`), written with default attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyProperties;

/// A complete text body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBody {
    /// Body properties
    pub body_properties: Option<BodyProperties>,
    /// Paragraphs
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Create an empty text body
    pub fn new() -> Self {
        Self::default()
    }

    /// Body holding a single run of text
    pub fn plain<S: Into<String>>(text: S) -> Self {
        let mut body = Self::new();
        body.add_body_properties();
        body.add_paragraph().add_run(text);
        body
    }

    /// Get or add the body properties
    pub fn add_body_properties(&mut self) -> &mut BodyProperties {
        self.body_properties.get_or_insert_with(BodyProperties::default)
    }

    /// Append a paragraph and return it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Text of all paragraphs joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Default font size of the first paragraph, in points
    pub fn default_font_size(&self) -> Option<f64> {
        self.paragraphs
            .first()
            .and_then(|p| p.default_run_properties.as_ref())
            .and_then(RunProperties::font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size_conversion() {
        let size = TextSize::from_points(9.0).unwrap();
        assert_eq!(size.hundredths(), 900);
        assert_eq!(size.points(), 9.0);

        assert!(TextSize::from_points(0.5).is_err());
        assert!(TextSize::from_points(4001.0).is_err());
        assert!(TextSize::from_points(f64::NAN).is_err());
    }

    #[test]
    fn test_plain_body() {
        let body = TextBody::plain("Sales");
        assert_eq!(body.text(), "Sales");
        assert!(body.body_properties.is_some());
        assert_eq!(body.default_font_size(), None);
    }

    #[test]
    fn test_default_run_properties() {
        let mut body = TextBody::new();
        body.add_paragraph()
            .add_default_run_properties()
            .set_font_size(TextSize::from_points(12.5).unwrap());
        assert_eq!(body.default_font_size(), Some(12.5));
    }
}
