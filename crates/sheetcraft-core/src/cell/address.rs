//! Cell address, range and row-span types

use std::fmt;
use std::str::FromStr;

use sheetcraft_chart::SheetRange;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A cell position (0-based row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in A1 notation)
    pub row: u32,
    /// Column index (A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse A1-style notation; `$` markers are accepted and dropped
    ///
    /// ```
    /// use sheetcraft_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("$B$2").unwrap();
    /// assert_eq!((addr.row, addr.col), (1, 1));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let body: String = s.chars().filter(|&c| c != '$').collect();
        let split = body
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| Error::InvalidAddress(format!("no row number in '{}'", s)))?;
        let (letters, digits) = body.split_at(split);
        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(letters)?;
        let row = parse_row_number(digits, s)?;
        Ok(Self { row, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut letters = Vec::new();
        let mut n = col as u32 + 1;
        while n > 0 {
            n -= 1;
            letters.push((n % 26) as u8 + b'A');
            n /= 26;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }
        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return Err(Error::ColumnOutOfBounds(u16::MAX, MAX_COLS - 1));
            }
        }
        Ok((col - 1) as u16)
    }
}

fn parse_row_number(digits: &str, source: &str) -> Result<u32> {
    let row: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", source)))?;
    if row == 0 {
        return Err(Error::InvalidAddress(format!(
            "row number must be >= 1 in '{}'",
            source
        )));
    }
    if row > MAX_ROWS {
        return Err(Error::RowOutOfBounds(row - 1, MAX_ROWS - 1));
    }
    Ok(row - 1)
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells, always stored top-left to bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Top-left corner
    pub start: CellAddress,
    /// Bottom-right corner
    pub end: CellAddress,
}

impl CellRange {
    /// Create a range from two corners in any order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a range from first/last row and first/last column
    pub fn from_bounds(first_row: u32, last_row: u32, first_col: u16, last_col: u16) -> Self {
        Self::new(
            CellAddress::new(first_row, first_col),
            CellAddress::new(last_row, last_col),
        )
    }

    /// Parse `A1:B10` or a single `C3`
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    /// Whether a cell lies in the range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Number of cells
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// The same rectangle as a chart data reference on `sheet`
    pub fn on_sheet(&self, sheet: &str) -> SheetRange {
        SheetRange::new(
            sheet,
            self.start.row,
            self.end.row,
            self.start.col,
            self.end.col,
        )
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A span of whole rows, e.g. `1:3` (0-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowSpan {
    /// First row
    pub first: u32,
    /// Last row
    pub last: u32,
}

impl RowSpan {
    /// Create a span from two rows in any order
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// Parse `1:3` or `$1:$3` (1-based in text)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidRange(format!("expected 'first:last' rows in '{}'", s)))?;
        let row = |part: &str| {
            parse_row_number(part.trim().trim_start_matches('$'), s)
                .map_err(|_| Error::InvalidRange(format!("invalid row span '{}'", s)))
        };
        Ok(Self::new(row(a)?, row(b)?))
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.last - self.first + 1
    }
}

impl fmt::Display for RowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}:${}", self.first + 1, self.last + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(16383), "XFD");
        assert_eq!(CellAddress::letters_to_column("ab").unwrap(), 27);
        assert_eq!(CellAddress::letters_to_column("XFD").unwrap(), 16383);
        assert!(CellAddress::letters_to_column("XFE").is_err());
    }

    #[test]
    fn test_address_parse() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(0, 0));
        assert_eq!(CellAddress::parse("$C$10").unwrap(), CellAddress::new(9, 2));
        assert_eq!(
            CellAddress::parse("XFD1048576").unwrap(),
            CellAddress::new(1_048_575, 16_383)
        );

        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("A1048577").is_err());
    }

    #[test]
    fn test_range() {
        let range = CellRange::parse("B4:A1").unwrap();
        assert_eq!(range.start, CellAddress::new(0, 0));
        assert_eq!(range.end, CellAddress::new(3, 1));
        assert_eq!(range.cell_count(), 8);
        assert!(range.contains(&CellAddress::new(2, 1)));
        assert!(!range.contains(&CellAddress::new(4, 0)));
        assert_eq!(range.to_string(), "A1:B4");
    }

    #[test]
    fn test_range_on_sheet() {
        let range = CellRange::from_bounds(1, 4, 1, 1);
        assert_eq!(range.on_sheet("Report").formula(), "'Report'!$B$2:$B$5");
    }

    #[test]
    fn test_row_span() {
        assert_eq!(RowSpan::parse("1:3").unwrap(), RowSpan::new(0, 2));
        assert_eq!(RowSpan::parse("$2:$2").unwrap(), RowSpan::new(1, 1));
        assert_eq!(RowSpan::parse("1:3").unwrap().row_count(), 3);
        assert_eq!(RowSpan::new(0, 2).to_string(), "$1:$3");

        assert!(RowSpan::parse("1").is_err());
        assert!(RowSpan::parse("A1:B2").is_err());
        assert!(RowSpan::parse("0:2").is_err());
    }
}
