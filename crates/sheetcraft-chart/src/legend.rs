//! Legend types

use crate::text::TextBody;

/// Chart legend
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    /// Position
    pub position: LegendPosition,
    /// Whether legend overlays the chart
    pub overlay: bool,
    /// Entry text formatting
    text_body: Option<TextBody>,
}

impl Legend {
    /// Create a new legend
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            overlay: false,
            text_body: None,
        }
    }

    /// Position
    pub fn position(&self) -> LegendPosition {
        self.position
    }

    /// Set the position
    pub fn set_position(&mut self, position: LegendPosition) {
        self.position = position;
    }

    /// Replace the text body with a fully built one
    pub fn set_text_body(&mut self, body: TextBody) {
        self.text_body = Some(body);
    }

    /// Current text body
    pub fn text_body(&self) -> Option<&TextBody> {
        self.text_body.as_ref()
    }

    /// Entry font size in points, read from the text body
    pub fn font_size(&self) -> Option<f64> {
        self.text_body.as_ref().and_then(TextBody::default_font_size)
    }
}

/// Legend position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Right,
    Top,
    Bottom,
    Left,
    TopRight,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextSize;

    #[test]
    fn test_font_size_comes_from_body() {
        let mut legend = Legend::new(LegendPosition::Bottom);
        assert_eq!(legend.font_size(), None);

        let mut body = TextBody::new();
        body.add_paragraph()
            .add_default_run_properties()
            .set_font_size(TextSize::from_points(9.0).unwrap());
        legend.set_text_body(body);

        assert_eq!(legend.position(), LegendPosition::Bottom);
        assert_eq!(legend.font_size(), Some(9.0));
    }
}
