//! Rich text cell content

use crate::style::FontStyle;

/// A run of text with optional font override
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextRun {
    /// Text
    pub text: String,
    /// Font applied to this run (None = cell font)
    pub font: Option<FontStyle>,
}

/// Text made of differently formatted runs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    runs: Vec<RichTextRun>,
}

impl RichText {
    /// Create empty rich text
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run using the cell font
    pub fn push<S: Into<String>>(mut self, text: S) -> Self {
        self.runs.push(RichTextRun {
            text: text.into(),
            font: None,
        });
        self
    }

    /// Append a run with its own font
    pub fn push_styled<S: Into<String>>(mut self, text: S, font: FontStyle) -> Self {
        self.runs.push(RichTextRun {
            text: text.into(),
            font: Some(font),
        });
        self
    }

    /// All runs
    pub fn runs(&self) -> &[RichTextRun] {
        &self.runs
    }

    /// Plain text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let text = RichText::new()
            .push("Total: ")
            .push_styled("42", FontStyle::new().with_bold(true));
        assert_eq!(text.plain_text(), "Total: 42");
        assert_eq!(text.runs().len(), 2);
        assert!(text.runs()[1].font.as_ref().unwrap().bold);
    }
}
