//! Workbook type - the main document structure

use std::fmt;

use crate::cell::CellValue;
use crate::error::{Entity, Error, Result};
use crate::page_setup::PrintLayout;
use crate::row::Row;
use crate::style::{Alignment, BorderLineStyle, CellStyle, FontStyle, StyleId, StyleRegistry};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Handle of a worksheet in a [`Workbook`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub usize);

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A workbook (spreadsheet document)
///
/// Owns its worksheets in creation order and the registry of every style
/// created for it.
#[derive(Debug, Default)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Styles shared by all sheets
    styles: StyleRegistry,
    /// Workbook settings
    settings: WorkbookSettings,
}

impl Workbook {
    /// Create a workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty workbook with the given settings
    pub fn with_settings(settings: WorkbookSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by handle
    pub fn worksheet(&self, id: SheetId) -> Option<&Worksheet> {
        self.worksheets.get(id.0)
    }

    /// Get a mutable worksheet by handle
    pub fn worksheet_mut(&mut self, id: SheetId) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(id.0)
    }

    /// Get a worksheet or fail with [`Error::NotFound`]
    pub fn sheet(&self, id: SheetId) -> Result<&Worksheet> {
        self.worksheets.get(id.0).ok_or(Error::NotFound(Entity::Sheet(id.0)))
    }

    /// Get a mutable worksheet or fail with [`Error::NotFound`]
    pub fn sheet_mut(&mut self, id: SheetId) -> Result<&mut Worksheet> {
        self.worksheets
            .get_mut(id.0)
            .ok_or(Error::NotFound(Entity::Sheet(id.0)))
    }

    /// Get the handle of a worksheet by name (case-insensitive)
    pub fn sheet_by_name(&self, name: &str) -> Option<SheetId> {
        let name = name.to_lowercase();
        self.worksheets
            .iter()
            .position(|ws| ws.name().to_lowercase() == name)
            .map(SheetId)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a worksheet
    ///
    /// Without a name the sheet is called `Sheet{n}` for the first free `n`.
    pub fn create_sheet(&mut self, name: Option<&str>) -> Result<SheetId> {
        let name = match name {
            Some(name) => {
                self.validate_sheet_name(name)?;
                name.to_string()
            }
            None => self.generate_sheet_name(),
        };

        let id = SheetId(self.worksheets.len());
        log::debug!("creating sheet {} '{}'", id, name);
        self.worksheets.push(Worksheet::new(name));
        Ok(id)
    }

    /// Apply orientation, repeating rows, paper size and page fitting
    ///
    /// Nothing is applied if the sheet is missing or the repeating-row span
    /// does not parse.
    pub fn configure_print_layout(&mut self, sheet: SheetId, layout: PrintLayout) -> Result<()> {
        self.sheet_mut(sheet)?.page_setup_mut().apply(&layout)
    }

    /// Write a value into a cell, creating the row and cell as needed
    ///
    /// The cell's style is replaced by `style` (no merging); a `None` style
    /// clears it. A comment already on the cell is kept.
    pub fn write_cell<V: Into<CellValue>>(
        &mut self,
        sheet: SheetId,
        row: u32,
        col: u16,
        value: V,
        style: Option<StyleId>,
    ) -> Result<&mut Row> {
        self.check_style(style)?;
        self.sheet_mut(sheet)?.set_cell(row, col, value.into(), style)
    }

    /// Style every cell of `from_col..=to_col` on `row`
    pub fn fill_row_range(
        &mut self,
        sheet: SheetId,
        row: u32,
        from_col: u16,
        to_col: u16,
        style: Option<StyleId>,
    ) -> Result<()> {
        self.check_style(style)?;
        self.sheet_mut(sheet)?
            .style_row_span(row, from_col, to_col, style)
    }

    /// Style the cell in `col` on every row of `from_row..=to_row`
    pub fn fill_column_range(
        &mut self,
        sheet: SheetId,
        col: u16,
        from_row: u32,
        to_row: u32,
        style: Option<StyleId>,
    ) -> Result<()> {
        self.check_style(style)?;
        self.sheet_mut(sheet)?
            .style_column_span(col, from_row, to_row, style)
    }

    /// Register a new style built from its parts
    pub fn create_style(
        &mut self,
        font: FontStyle,
        alignment: Alignment,
        border: Option<BorderLineStyle>,
    ) -> StyleId {
        self.styles.create(font, alignment, border)
    }

    /// The resolved style of a cell, `None` for missing or unstyled cells
    pub fn cell_style(&self, sheet: SheetId, row: u32, col: u16) -> Option<&CellStyle> {
        let id = self.worksheet(sheet)?.cell_at(row, col)?.style?;
        self.styles.get(id)
    }

    /// The workbook's style registry
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// The workbook's style registry, for presets and direct registration
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Get workbook settings
    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    /// Get mutable workbook settings
    pub fn settings_mut(&mut self) -> &mut WorkbookSettings {
        &mut self.settings
    }

    fn check_style(&self, style: Option<StyleId>) -> Result<()> {
        match style {
            Some(id) if !self.styles.contains(id) => Err(Error::NotFound(Entity::Style(id.index()))),
            _ => Ok(()),
        }
    }

    /// Validate a sheet name: length, reserved characters, uniqueness
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        if self.sheet_by_name(name).is_some() {
            return Err(Error::DuplicateSheetName(name.into()));
        }
        Ok(())
    }

    /// Generate a unique sheet name
    fn generate_sheet_name(&self) -> String {
        (1..)
            .map(|n| format!("Sheet{}", n))
            .find(|name| self.sheet_by_name(name).is_none())
            .unwrap_or_default()
    }
}

/// Workbook-level settings
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookSettings {
    /// Date system: false = 1900 (Windows), true = 1904 (Mac)
    pub date_1904: bool,
    /// Author recorded on new comments
    pub comment_author: String,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            date_1904: false,
            comment_author: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::RowSpan;
    use crate::page_setup::PaperSize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_workbook_is_empty() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 0);
        assert!(wb.styles().is_empty());
    }

    #[test]
    fn test_create_sheets() {
        let mut wb = Workbook::new();

        let first = wb.create_sheet(None).unwrap();
        let data = wb.create_sheet(Some("Data")).unwrap();
        let third = wb.create_sheet(None).unwrap();

        assert_eq!((first, data, third), (SheetId(0), SheetId(1), SheetId(2)));
        let names: Vec<&str> = wb.worksheets().map(|ws| ws.name()).collect();
        assert_eq!(names, vec!["Sheet1", "Data", "Sheet2"]);
    }

    #[test]
    fn test_generated_name_skips_taken() {
        let mut wb = Workbook::new();
        wb.create_sheet(Some("sheet1")).unwrap();
        let id = wb.create_sheet(None).unwrap();
        assert_eq!(wb.sheet(id).unwrap().name(), "Sheet2");
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();
        wb.create_sheet(Some("Report")).unwrap();

        assert!(matches!(
            wb.create_sheet(Some("REPORT")),
            Err(Error::DuplicateSheetName(_))
        ));
        assert_eq!(wb.sheet_count(), 1);
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();

        assert!(wb.create_sheet(Some("")).is_err());
        assert!(wb.create_sheet(Some("Sheet/1")).is_err());
        assert!(wb.create_sheet(Some("Sheet:1")).is_err());
        assert!(wb.create_sheet(Some("Sheet[1]")).is_err());

        let long_name = "A".repeat(MAX_SHEET_NAME_LEN + 1);
        assert!(wb.create_sheet(Some(&long_name)).is_err());
        assert!(wb.is_empty());
    }

    #[test]
    fn test_missing_sheet() {
        let mut wb = Workbook::new();
        let err = wb.write_cell(SheetId(3), 0, 0, 1, None).unwrap_err();
        assert!(matches!(err, Error::NotFound(Entity::Sheet(3))));
        assert!(wb
            .configure_print_layout(SheetId(0), PrintLayout::default())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_write_cell_replaces_style() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(Some("Report")).unwrap();
        let bold = wb.styles_mut().bold_with_all_borders("Arial", 10.0);
        let plain = wb.create_style(FontStyle::new(), Alignment::default(), None);

        wb.write_cell(sheet, 0, 0, "Title", Some(bold)).unwrap();
        wb.write_cell(sheet, 0, 0, "Title 2", Some(plain)).unwrap();

        assert_eq!(wb.cell_style(sheet, 0, 0), wb.styles().get(plain));
        wb.write_cell(sheet, 0, 0, "Title 3", None).unwrap();
        assert_eq!(wb.cell_style(sheet, 0, 0), None);
    }

    #[test]
    fn test_unknown_style_rejected() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(None).unwrap();
        let err = wb
            .write_cell(sheet, 0, 0, 1.5, Some(StyleId(7)))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(Entity::Style(7))));
        assert!(wb.sheet(sheet).unwrap().is_empty());
    }

    #[test]
    fn test_fill_ranges() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(None).unwrap();
        let style = wb.styles_mut().regular_with_all_borders("Arial", 9.0);

        wb.write_cell(sheet, 2, 1, 99, None).unwrap();
        wb.fill_row_range(sheet, 2, 0, 3, Some(style)).unwrap();
        wb.fill_column_range(sheet, 5, 0, 2, Some(style)).unwrap();

        let ws = wb.sheet(sheet).unwrap();
        for col in 0..=3 {
            assert_eq!(ws.cell_at(2, col).and_then(|c| c.style), Some(style));
        }
        for row in 0..=2 {
            assert_eq!(ws.cell_at(row, 5).and_then(|c| c.style), Some(style));
        }
        assert_eq!(ws.value_at(2, 1), &CellValue::Integer(99));
        assert!(ws.value_at(2, 0).is_empty());
    }

    #[test]
    fn test_reversed_fill_ranges_are_empty() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(None).unwrap();
        let style = wb.styles_mut().bold_without_borders("Arial", 9.0);

        wb.fill_row_range(sheet, 0, 5, 2, Some(style)).unwrap();
        wb.fill_column_range(sheet, 0, 4, 1, Some(style)).unwrap();

        assert_eq!(wb.sheet(sheet).unwrap().cell_count(), 0);
        assert_eq!(wb.cell_style(sheet, 0, 3), None);
    }

    #[test]
    fn test_configure_print_layout() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(None).unwrap();
        let layout = PrintLayout::new(true, PaperSize::A4)
            .with_repeating_rows("$1:$2")
            .fit_to(1, 3);
        wb.configure_print_layout(sheet, layout).unwrap();

        let setup = wb.sheet(sheet).unwrap().page_setup();
        assert!(setup.is_landscape());
        assert_eq!(setup.repeating_rows, Some(RowSpan::new(0, 1)));
        assert_eq!((setup.fit_to_width, setup.fit_to_height), (1, 3));
    }

    #[test]
    fn test_default_settings() {
        let wb = Workbook::new();
        assert!(!wb.settings().date_1904);
        assert_eq!(wb.settings().comment_author, "");
    }
}
