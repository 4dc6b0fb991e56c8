//! Handing a finished workbook to a serializer
//!
//! The on-disk format lives outside this crate. A [`Serializer`] receives
//! the workbook only after [`validate`] has checked the structure every
//! chart and comment shape must have.

use std::fmt;

use sheetcraft_chart::ChartError;
use sheetcraft_core::Workbook;
use thiserror::Error;

/// Turns a workbook into bytes of some file format
pub trait Serializer {
    /// Error raised by the serializer itself
    type Error;

    /// Serialize the whole workbook
    fn serialize(&self, workbook: &Workbook) -> Result<Vec<u8>, Self::Error>;
}

/// A drawing object on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingObject {
    /// Chart by index on the drawing
    Chart(usize),
    /// Comment shape of the cell at (row, col)
    Comment { row: u32, col: u16 },
}

impl fmt::Display for DrawingObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawingObject::Chart(i) => write!(f, "chart {}", i),
            DrawingObject::Comment { row, col } => write!(f, "comment at ({}, {})", row, col),
        }
    }
}

/// A structural problem found before serialization
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{object} on sheet '{sheet}': {reason}")]
pub struct ValidationError {
    /// Name of the sheet holding the object
    pub sheet: String,
    pub object: DrawingObject,
    #[source]
    pub reason: ChartError,
}

/// Errors from [`export`]
#[derive(Debug, Error)]
pub enum ExportError<E> {
    /// The workbook failed validation; the serializer was not called
    #[error("Workbook is not ready for export: {0}")]
    Invalid(#[from] ValidationError),

    /// The serializer failed
    #[error("Serializer failed: {0}")]
    Serializer(E),
}

/// Check every chart and comment shape of every sheet
///
/// Reports the first problem in sheet, then drawing order.
pub fn validate(workbook: &Workbook) -> Result<(), ValidationError> {
    for sheet in workbook.worksheets() {
        let Some(drawing) = sheet.drawing() else {
            continue;
        };
        let fail = |object, reason| ValidationError {
            sheet: sheet.name().to_string(),
            object,
            reason,
        };

        for (index, chart) in drawing.charts().iter().enumerate() {
            chart
                .validate()
                .map_err(|reason| fail(DrawingObject::Chart(index), reason))?;
        }
        for shape in drawing.comment_shapes() {
            shape.anchor.ensure_ordered().map_err(|reason| {
                fail(
                    DrawingObject::Comment {
                        row: shape.row,
                        col: shape.col,
                    },
                    reason,
                )
            })?;
        }
    }
    Ok(())
}

/// Validate the workbook, then serialize it
pub fn export<S: Serializer>(
    workbook: &Workbook,
    serializer: &S,
) -> Result<Vec<u8>, ExportError<S::Error>> {
    if let Err(err) = validate(workbook) {
        log::warn!("export rejected: {}", err);
        return Err(err.into());
    }
    serializer.serialize(workbook).map_err(ExportError::Serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetcraft_chart::Anchor;
    use sheetcraft_core::CellComment;

    struct SheetNames;

    impl Serializer for SheetNames {
        type Error = std::convert::Infallible;

        fn serialize(&self, workbook: &Workbook) -> Result<Vec<u8>, Self::Error> {
            let names: Vec<&str> = workbook.worksheets().map(|ws| ws.name()).collect();
            Ok(names.join(",").into_bytes())
        }
    }

    #[test]
    fn test_export_valid_workbook() {
        let mut wb = Workbook::new();
        wb.create_sheet(Some("A")).unwrap();
        wb.create_sheet(Some("B")).unwrap();
        assert_eq!(export(&wb, &SheetNames).unwrap(), b"A,B".to_vec());
    }

    #[test]
    fn test_inverted_comment_anchor_rejected() {
        let mut wb = Workbook::new();
        let sheet = wb.create_sheet(Some("Notes")).unwrap();
        wb.write_cell(sheet, 2, 2, "x", None).unwrap();
        let comment = CellComment::new("", "bad").with_anchor(Anchor::cells(5, 5, 1, 1));
        wb.sheet_mut(sheet)
            .unwrap()
            .set_comment_at(2, 2, comment)
            .unwrap();

        let err = validate(&wb).unwrap_err();
        assert_eq!(err.object, DrawingObject::Comment { row: 2, col: 2 });
        assert_eq!(err.reason, ChartError::InvertedAnchor);
        assert!(matches!(
            export(&wb, &SheetNames),
            Err(ExportError::Invalid(_))
        ));
    }
}
