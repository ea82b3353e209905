//! Timetable workbook reading with calamine

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, DataType, Range, Reader, Xlsx, XlsxError};
use tracing::{debug, warn};

use crate::parser::timetable::TIMETABLE_COLUMNS;
use crate::utils::error::ParseError;

/// Cell holding the semester/curriculum label, as absolute `(row, column)`
pub const LABEL_CELL: (u32, u32) = (1, 0);

/// The cells of one timetable worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableSheet {
    pub name: String,
    /// Semester/curriculum label, e.g. `Spring Semester Timetable (For 2017 Curriculum students)`
    pub label: String,
    /// Every row of the used range, fifteen cells each; `None` for empty cells
    pub rows: Vec<Vec<Option<String>>>,
}

/// Read every worksheet of an xlsx workbook held in memory
///
/// Worksheets without a label cell are skipped.
///
/// # Errors
///
/// Returns `ParseError::Workbook` when the bytes are not a readable workbook.
pub fn read_workbook(bytes: &[u8]) -> Result<Vec<TimetableSheet>, ParseError> {
    let mut workbook: Xlsx<Cursor<&[u8]>> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: XlsxError| ParseError::Workbook(e.to_string()))?;

    let sheets = workbook
        .worksheets()
        .into_iter()
        .filter_map(|(name, range): (String, Range<Data>)| {
            let sheet = sheet_from_range(&name, &range);
            if sheet.is_none() {
                warn!(sheet = %name, "Worksheet has no semester label, skipping");
            }
            sheet
        })
        .collect::<Vec<_>>();

    debug!(sheets = sheets.len(), "Workbook read");
    Ok(sheets)
}

/// Collect the label and fifteen-column rows of one worksheet range
pub fn sheet_from_range(name: &str, range: &Range<Data>) -> Option<TimetableSheet> {
    let label = cell_text(range, LABEL_CELL)?;
    let (start, end) = (range.start()?, range.end()?);

    let rows = (start.0..=end.0)
        .map(|row| {
            (start.1..start.1 + TIMETABLE_COLUMNS as u32)
                .map(|col| cell_text(range, (row, col)))
                .collect()
        })
        .collect();

    Some(TimetableSheet {
        name: name.to_string(),
        label,
        rows,
    })
}

fn cell_text(range: &Range<Data>, position: (u32, u32)) -> Option<String> {
    range
        .get_value(position)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "Spring Semester Timetable (For 2017 Curriculum students)";

    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (3, 14));
        range.set_value((0, 0), Data::String("2018 Timetable".to_string()));
        range.set_value((1, 0), Data::String(LABEL.to_string()));
        range.set_value((2, 5), Data::String("講義CD/Subject CD".to_string()));
        range.set_value((3, 0), Data::String("Semester".to_string()));
        range.set_value((3, 2), Data::Int(1));
        range.set_value((3, 5), Data::String("11010".to_string()));
        range
    }

    #[test]
    fn test_sheet_from_range_reads_label_and_rows() {
        let sheet = sheet_from_range("Sheet1", &sample_range()).unwrap();
        assert_eq!(sheet.name, "Sheet1");
        assert_eq!(sheet.label, LABEL);
        assert_eq!(sheet.rows.len(), 4);
        assert!(sheet.rows.iter().all(|row| row.len() == TIMETABLE_COLUMNS));
        assert_eq!(sheet.rows[3][0].as_deref(), Some("Semester"));
        assert_eq!(sheet.rows[3][2].as_deref(), Some("1"));
        assert_eq!(sheet.rows[3][5].as_deref(), Some("11010"));
        assert_eq!(sheet.rows[3][1], None);
    }

    #[test]
    fn test_sheet_without_label_is_skipped() {
        let mut range = Range::new((0, 0), (2, 14));
        range.set_value((0, 0), Data::String("title".to_string()));
        assert!(sheet_from_range("Sheet2", &range).is_none());
    }

    #[test]
    fn test_empty_range_is_skipped() {
        let range: Range<Data> = Range::empty();
        assert!(sheet_from_range("Empty", &range).is_none());
    }

    #[test]
    fn test_read_workbook_rejects_garbage() {
        let err = read_workbook(b"not a workbook").unwrap_err();
        assert!(matches!(err, ParseError::Workbook(_)));
    }
}
