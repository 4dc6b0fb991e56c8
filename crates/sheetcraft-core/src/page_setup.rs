//! Print settings of a worksheet

use crate::cell::RowSpan;
use crate::error::Result;

/// Page setup for printing
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    /// Paper size
    pub paper_size: PaperSize,
    /// Orientation
    pub orientation: PageOrientation,
    /// Shrink the print area to the fit width/height page counts
    pub fit_to_page: bool,
    /// Fit to pages wide (0 = no limit)
    pub fit_to_width: u16,
    /// Fit to pages tall (0 = no limit)
    pub fit_to_height: u16,
    /// Rows printed at the top of every page
    pub repeating_rows: Option<RowSpan>,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::Letter,
            orientation: PageOrientation::Portrait,
            fit_to_page: false,
            fit_to_width: 1,
            fit_to_height: 1,
            repeating_rows: None,
        }
    }
}

impl PageSetup {
    /// Whether pages print in landscape
    pub fn is_landscape(&self) -> bool {
        self.orientation == PageOrientation::Landscape
    }

    /// Apply a [`PrintLayout`]
    ///
    /// The repeating-row span is parsed before any field is touched, so an
    /// invalid span leaves the setup unchanged.
    pub fn apply(&mut self, layout: &PrintLayout) -> Result<()> {
        let repeating_rows = layout
            .repeating_rows
            .as_deref()
            .map(RowSpan::parse)
            .transpose()?;

        self.orientation = if layout.landscape {
            PageOrientation::Landscape
        } else {
            PageOrientation::Portrait
        };
        if repeating_rows.is_some() {
            self.repeating_rows = repeating_rows;
        }
        self.paper_size = layout.paper_size;
        self.fit_to_page = layout.fit_to_page;
        self.fit_to_height = layout.fit_height;
        self.fit_to_width = layout.fit_width;
        Ok(())
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Standard paper sizes with their spreadsheet codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    #[default]
    Letter,
    LetterSmall,
    Tabloid,
    Ledger,
    Legal,
    Statement,
    Executive,
    A3,
    A4,
    A4Small,
    A5,
    B4,
    B5,
    Folio,
    Quarto,
    Standard10x14,
    Standard11x17,
    Envelope10,
    EnvelopeDL,
    EnvelopeC5,
    EnvelopeMonarch,
}

impl PaperSize {
    /// The numeric code stored in page setup records
    pub fn code(&self) -> u8 {
        match self {
            PaperSize::Letter => 1,
            PaperSize::LetterSmall => 2,
            PaperSize::Tabloid => 3,
            PaperSize::Ledger => 4,
            PaperSize::Legal => 5,
            PaperSize::Statement => 6,
            PaperSize::Executive => 7,
            PaperSize::A3 => 8,
            PaperSize::A4 => 9,
            PaperSize::A4Small => 10,
            PaperSize::A5 => 11,
            PaperSize::B4 => 12,
            PaperSize::B5 => 13,
            PaperSize::Folio => 14,
            PaperSize::Quarto => 15,
            PaperSize::Standard10x14 => 16,
            PaperSize::Standard11x17 => 17,
            PaperSize::Envelope10 => 20,
            PaperSize::EnvelopeDL => 27,
            PaperSize::EnvelopeC5 => 28,
            PaperSize::EnvelopeMonarch => 37,
        }
    }
}

/// Print options applied in one step by `Workbook::configure_print_layout`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintLayout {
    /// Landscape instead of portrait
    pub landscape: bool,
    /// Row span repeated on each page, e.g. `"1:3"` or `"$1:$3"`
    pub repeating_rows: Option<String>,
    pub paper_size: PaperSize,
    pub fit_to_page: bool,
    /// Maximum pages tall
    pub fit_height: u16,
    /// Maximum pages wide
    pub fit_width: u16,
}

impl PrintLayout {
    /// Landscape or portrait layout on the given paper, no fitting
    pub fn new(landscape: bool, paper_size: PaperSize) -> Self {
        Self {
            landscape,
            paper_size,
            ..Self::default()
        }
    }

    /// Repeat a row span on every page
    pub fn with_repeating_rows<S: Into<String>>(mut self, rows: S) -> Self {
        self.repeating_rows = Some(rows.into());
        self
    }

    /// Fit the print area to `width` by `height` pages
    pub fn fit_to(mut self, width: u16, height: u16) -> Self {
        self.fit_to_page = true;
        self.fit_width = width;
        self.fit_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_apply_layout() {
        let mut setup = PageSetup::default();
        let layout = PrintLayout::new(true, PaperSize::A4)
            .with_repeating_rows("1:3")
            .fit_to(1, 0);
        setup.apply(&layout).unwrap();

        assert!(setup.is_landscape());
        assert_eq!(setup.repeating_rows, Some(RowSpan::new(0, 2)));
        assert_eq!(setup.paper_size.code(), 9);
        assert!(setup.fit_to_page);
        assert_eq!((setup.fit_to_width, setup.fit_to_height), (1, 0));
    }

    #[test]
    fn test_invalid_rows_leave_setup_unchanged() {
        let mut setup = PageSetup::default();
        let layout = PrintLayout::new(true, PaperSize::A3).with_repeating_rows("A1");
        let err = setup.apply(&layout).unwrap_err();

        assert!(matches!(err, Error::InvalidRange(_)));
        assert_eq!(setup, PageSetup::default());
    }

    #[test]
    fn test_no_repeating_rows_keeps_previous() {
        let mut setup = PageSetup::default();
        setup
            .apply(&PrintLayout::default().with_repeating_rows("$2:$2"))
            .unwrap();
        setup.apply(&PrintLayout::default()).unwrap();
        assert_eq!(setup.repeating_rows, Some(RowSpan::new(1, 1)));
        assert!(!setup.is_landscape());
    }
}
