//! Error types for sheetcraft-core

use std::fmt;

use sheetcraft_chart::ChartError;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetcraft-core
#[derive(Debug, Error)]
pub enum Error {
    /// Operation on a sheet, cell, chart or other entity that does not exist
    #[error("{0} not found")]
    NotFound(Entity),

    /// A caller-supplied structural invariant does not hold
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// A chart building block was given invalid input
    ///
    /// Lookups that miss inside a chart convert to [`Error::NotFound`]
    /// instead; see the `From<ChartError>` impl.
    #[error("Precondition violated: {0}")]
    Chart(#[source] ChartError),
}

impl From<ChartError> for Error {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::AxisNotFound(id) => Error::NotFound(Entity::Axis(id.0)),
            ChartError::DataNotFound(i) => Error::NotFound(Entity::ChartData(i)),
            ChartError::SeriesNotFound(i) => Error::NotFound(Entity::Series(i)),
            other => Error::Chart(other),
        }
    }
}

impl Error {
    /// Create a precondition violation with a message
    pub fn precondition<S: Into<String>>(msg: S) -> Self {
        Error::PreconditionViolation(msg.into())
    }

    /// Whether this is a [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Whether the caller broke a structural invariant
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Error::PreconditionViolation(_) | Error::Chart(_))
    }
}

/// The kind of entity a [`Error::NotFound`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// Worksheet by index
    Sheet(usize),
    /// Cell by position
    Cell { row: u32, col: u16 },
    /// Registered style by id
    Style(u32),
    /// Chart by index on a sheet's drawing
    Chart(usize),
    /// Chart axis by id
    Axis(u32),
    /// Chart data group by index
    ChartData(usize),
    /// Series by index
    Series(usize),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Sheet(i) => write!(f, "Sheet {}", i),
            Entity::Cell { row, col } => write!(f, "Cell ({}, {})", row, col),
            Entity::Style(i) => write!(f, "Style {}", i),
            Entity::Chart(i) => write!(f, "Chart {}", i),
            Entity::Axis(id) => write!(f, "Axis {}", id),
            Entity::ChartData(i) => write!(f, "Chart data {}", i),
            Entity::Series(i) => write!(f, "Series {}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetcraft_chart::AxisId;

    #[test]
    fn test_display() {
        let err = Error::NotFound(Entity::Cell { row: 3, col: 1 });
        assert_eq!(err.to_string(), "Cell (3, 1) not found");
        assert!(err.is_not_found());

        let err: Error = ChartError::InvalidColor(2).into();
        assert_eq!(
            err.to_string(),
            "Precondition violated: Invalid RGB color: expected 3 bytes, got 2"
        );
        assert!(!err.is_not_found());
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn test_chart_lookup_becomes_not_found() {
        let err: Error = ChartError::AxisNotFound(AxisId(4)).into();
        assert!(matches!(err, Error::NotFound(Entity::Axis(4))));
        assert_eq!(err.to_string(), "Axis 4 not found");

        let err: Error = ChartError::SeriesNotFound(2).into();
        assert!(matches!(err, Error::NotFound(Entity::Series(2))));
    }
}
