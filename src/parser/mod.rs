//! Scraped content parsing and normalization
//!
//! This module turns raw HTML table cells and spreadsheet cells into typed
//! records. Each row passes through three stages:
//!
//! 1. [`sanitize`] normalizes every cell's text
//! 2. a row parser joins the cells into a pipe-delimited row
//!    ([`calendar::parse_row`], [`timetable::parse_row`])
//! 3. a formatter splits the row into its named fields and expands the coded
//!    values ([`calendar::format_event`], [`timetable::format_record`])
//!
//! Page and workbook extraction live in [`html`] and [`workbook`].

pub mod calendar;
pub mod html;
pub mod sanitize;
pub mod selectors;
pub mod timetable;
pub mod workbook;

pub use calendar::{format_event, RawCalendarRow, YearContext};
pub use html::{extract_calendar_rows, extract_menu_links, extract_timetable_links};
pub use timetable::{format_record, RawTimetableRow};
pub use workbook::{read_workbook, TimetableSheet};

use crate::utils::error::ParseError;

/// Field delimiter of the intermediate row format
pub const DELIMITER: char = '|';

/// [`DELIMITER`] as a string slice
pub const DELIMITER_STR: &str = "|";

/// Split a delimited row and check its field count
pub(crate) fn split_fields(row: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = row.split(DELIMITER).collect();
    if fields.len() != expected {
        return Err(ParseError::malformed(
            "row",
            format!("expected {expected} fields, found {}: {row:?}", fields.len()),
        ));
    }
    Ok(fields)
}
