//! Data sources feeding chart series

use std::fmt;

/// A rectangular block of cells on a named sheet
///
/// Bounds are always stored first-to-last; build one with [`SheetRange::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRange {
    sheet: String,
    first_row: u32,
    last_row: u32,
    first_col: u16,
    last_col: u16,
}

impl SheetRange {
    /// Create a range, normalizing reversed bounds
    pub fn new<S: Into<String>>(
        sheet: S,
        first_row: u32,
        last_row: u32,
        first_col: u16,
        last_col: u16,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            first_row: first_row.min(last_row),
            last_row: first_row.max(last_row),
            first_col: first_col.min(last_col),
            last_col: first_col.max(last_col),
        }
    }

    /// Sheet name
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// First and last row (0-based, inclusive)
    pub fn rows(&self) -> (u32, u32) {
        (self.first_row, self.last_row)
    }

    /// First and last column (0-based, inclusive)
    pub fn cols(&self) -> (u16, u16) {
        (self.first_col, self.last_col)
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        let rows = (self.last_row - self.first_row) as usize + 1;
        let cols = (self.last_col - self.first_col) as usize + 1;
        rows * cols
    }

    /// Absolute reference, e.g. `'Report'!$A$2:$A$5`
    pub fn formula(&self) -> String {
        format!(
            "'{}'!${}${}:${}${}",
            self.sheet.replace('\'', "''"),
            column_name(self.first_col),
            self.first_row + 1,
            column_name(self.last_col),
            self.last_row + 1
        )
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

fn column_name(col: u16) -> String {
    let mut name = String::new();
    let mut n = col as u32 + 1;
    while n > 0 {
        n -= 1;
        name.insert(0, ((n % 26) as u8 + b'A') as char);
        n /= 26;
    }
    name
}

/// Read-only data for one dimension of a series
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource<T> {
    /// Values given inline
    Literal(Vec<T>),
    /// Values read from cells when the document is opened
    Range(SheetRange),
}

/// Category (string) data
pub type CategoryDataSource = DataSource<String>;

/// Numeric data
pub type NumericDataSource = DataSource<f64>;

impl<T> DataSource<T> {
    /// Number of points this source provides
    pub fn point_count(&self) -> usize {
        match self {
            DataSource::Literal(values) => values.len(),
            DataSource::Range(range) => range.cell_count(),
        }
    }

    /// Whether the source references sheet cells
    pub fn is_reference(&self) -> bool {
        matches!(self, DataSource::Range(_))
    }

    /// Reference formula, for range-backed sources
    pub fn formula(&self) -> Option<String> {
        match self {
            DataSource::Literal(_) => None,
            DataSource::Range(range) => Some(range.formula()),
        }
    }

    /// Inline values, for literal sources
    pub fn literal(&self) -> Option<&[T]> {
        match self {
            DataSource::Literal(values) => Some(values),
            DataSource::Range(_) => None,
        }
    }
}

impl CategoryDataSource {
    /// Categories from a slice of strings
    pub fn from_strings<S: AsRef<str>>(values: &[S]) -> Self {
        DataSource::Literal(values.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl NumericDataSource {
    /// Numbers from any slice of numeric values
    pub fn from_numbers<V: Copy + Into<f64>>(values: &[V]) -> Self {
        DataSource::Literal(values.iter().map(|&v| v.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes_and_counts() {
        let range = SheetRange::new("Data", 5, 1, 2, 0);
        assert_eq!(range.sheet(), "Data");
        assert_eq!(range.rows(), (1, 5));
        assert_eq!(range.cols(), (0, 2));
        assert_eq!(range.cell_count(), 15);
        assert_eq!(range, SheetRange::new("Data", 1, 5, 0, 2));
    }

    #[test]
    fn test_range_formula() {
        let range = SheetRange::new("Report", 1, 4, 0, 0);
        assert_eq!(range.formula(), "'Report'!$A$2:$A$5");

        let range = SheetRange::new("Bob's", 0, 0, 27, 27);
        assert_eq!(range.formula(), "'Bob''s'!$AB$1:$AB$1");
    }

    #[test]
    fn test_literal_sources() {
        let cats = CategoryDataSource::from_strings(&["Q1", "Q2"]);
        let vals = NumericDataSource::from_numbers(&[10, 20]);
        assert_eq!(cats.point_count(), 2);
        assert_eq!(vals.literal(), Some(&[10.0, 20.0][..]));
        assert!(!vals.is_reference());
        assert_eq!(vals.formula(), None);
    }
}
