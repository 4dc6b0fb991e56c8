//! Cell value types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::RichText;

/// Represents the content written into a cell
///
/// Besides `Empty`, the variants are the seven kinds of content a cell can
/// be given.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Plain text
    Text(String),

    /// Floating point number
    Number(f64),

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Calendar date
    Date(NaiveDate),

    /// Date with time of day
    DateTime(NaiveDateTime),

    /// Text made of formatted runs
    RichText(RichText),

    /// Whole number
    Integer(i64),
}

impl CellValue {
    /// Create a text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    ///
    /// Dates are not converted here; see [`CellValue::to_serial`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as plain text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value as stored in the sheet
    ///
    /// Numbers pass through, booleans become 1/0, and dates become serial
    /// day numbers in the 1900 or 1904 date system. Text has no serial form.
    pub fn to_serial(&self, date_1904: bool) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(n) => Some(*n as f64),
            CellValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Date(d) => Some(date_serial(*d, date_1904) as f64),
            CellValue::DateTime(dt) => {
                let day = date_serial(dt.date(), date_1904) as f64;
                let secs = dt.time().num_seconds_from_midnight() as f64
                    + dt.time().nanosecond() as f64 / 1e9;
                Some(day + secs / 86_400.0)
            }
            CellValue::Empty | CellValue::Text(_) | CellValue::RichText(_) => None,
        }
    }
}

/// Days since the epoch of the chosen date system
///
/// The 1900 system counts the phantom 1900-02-29, so dates from March 1900
/// on are offset by one from a plain day count.
fn date_serial(date: NaiveDate, date_1904: bool) -> i64 {
    if date_1904 {
        let epoch = NaiveDate::from_ymd_opt(1904, 1, 1).unwrap_or_default();
        return (date - epoch).num_days();
    }
    let leap_bug = NaiveDate::from_ymd_opt(1900, 3, 1).unwrap_or_default();
    let epoch = if date >= leap_bug {
        NaiveDate::from_ymd_opt(1899, 12, 30)
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 31)
    }
    .unwrap_or_default();
    (date - epoch).num_days()
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::RichText(r) => write!(f, "{}", r.plain_text()),
            CellValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<RichText> for CellValue {
    fn from(r: RichText) -> Self {
        CellValue::RichText(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(CellValue::from(42), CellValue::Integer(42));
        assert_eq!(CellValue::from(42.5), CellValue::Number(42.5));
        assert_eq!(CellValue::from("Total"), CellValue::text("Total"));
        assert_eq!(
            CellValue::from(date(2024, 1, 1)),
            CellValue::Date(date(2024, 1, 1))
        );
    }

    #[test]
    fn test_serial_1900() {
        assert_eq!(CellValue::Date(date(2024, 1, 1)).to_serial(false), Some(45292.0));
        assert_eq!(CellValue::Date(date(1900, 1, 1)).to_serial(false), Some(1.0));
        assert_eq!(CellValue::Date(date(1900, 3, 1)).to_serial(false), Some(61.0));
    }

    #[test]
    fn test_serial_1904() {
        assert_eq!(CellValue::Date(date(1904, 1, 1)).to_serial(true), Some(0.0));
        assert_eq!(CellValue::Date(date(2024, 1, 1)).to_serial(true), Some(43830.0));
    }

    #[test]
    fn test_serial_datetime() {
        let dt = date(2024, 1, 1).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(CellValue::DateTime(dt).to_serial(false), Some(45292.5));
    }

    #[test]
    fn test_serial_text_is_none() {
        assert_eq!(CellValue::text("x").to_serial(false), None);
        assert_eq!(CellValue::Boolean(true).to_serial(false), Some(1.0));
        assert_eq!(CellValue::Integer(7).as_number(), Some(7.0));
    }
}
