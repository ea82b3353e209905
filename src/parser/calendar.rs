//! Academic calendar rows
//!
//! The calendar table spans several rows per year: the year cell appears only
//! on the row that opens a year, and every following row inherits it. Rows
//! are therefore parsed as a fold over a [`YearContext`].
//!
//! A parsed data row has the shape `year|day|month|dayOfWeek|event|description`.

use crate::models::CalendarEvent;
use crate::parser::sanitize::{normalize_cell, EMPTY_SENTINEL, NEW_YEARS_DAY};
use crate::parser::{split_fields, DELIMITER, DELIMITER_STR};
use crate::utils::error::ParseError;

/// Header text of the date column
pub const HEADER_DATE: &str = "Date";

/// Description marker for national holidays with regular classes
pub const CLASSES_AS_USUAL: &str = "Classes as usual";

/// Number of fields in a parsed calendar row
pub const CALENDAR_FIELDS: usize = 6;

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// The most recently declared year while scanning rows top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearContext(String);

impl YearContext {
    pub fn new(year: impl Into<String>) -> Self {
        Self(year.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse one calendar table row into its delimited form
///
/// Returns the year context to use for the next row together with the
/// parsed row. A first cell of exactly four characters declares a new year;
/// any other first cell is stamped with the current year.
///
/// # Examples
///
/// ```
/// use apubot::parser::calendar::{parse_row, YearContext};
///
/// let (year, _) = parse_row(&["2018"], YearContext::default());
/// let (_, row) = parse_row(&["15-Jan", "Mon", "\u{a0}", "New Year's Day"], year);
/// assert_eq!(row, "2018|15|Jan|Mon|Empty|New Year's Day");
/// ```
pub fn parse_row<S: AsRef<str>>(cells: &[S], year: YearContext) -> (YearContext, String) {
    let mut year = year;
    let mut row = String::new();

    for (col, raw) in cells.iter().enumerate() {
        let mut cell = normalize_cell(raw.as_ref());

        // the year and date columns
        if col <= 1 {
            if cell == HEADER_DATE {
                cell = format!("{HEADER_DATE}{DELIMITER}Month");
            }
            cell = cell.replace('-', DELIMITER_STR);
        }

        if col == 0 {
            if cell.chars().count() == 4 {
                year = YearContext(cell.clone());
            } else {
                row.push_str(year.as_str());
                row.push(DELIMITER);
            }
        }

        row.push_str(&cell);
        row.push(DELIMITER);
    }

    if row.ends_with(DELIMITER) {
        row.pop();
    }

    (year, row)
}

/// Parse a whole table in document order, threading the year context
pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<String> {
    rows.iter()
        .scan(YearContext::default(), |year, cells| {
            let (next, row) = parse_row(cells, std::mem::take(year));
            *year = next;
            Some(row)
        })
        .collect()
}

/// Whether a parsed row carries calendar data
///
/// Header rows contain `Date`; New Year filler rows contain both the holiday
/// name and the empty sentinel.
pub fn is_data_row(row: &str) -> bool {
    let excluded = row.contains(HEADER_DATE)
        || (row.contains(NEW_YEARS_DAY) && row.contains(EMPTY_SENTINEL));
    !excluded
}

/// A row that only declares the year and has no date fields
pub fn is_year_marker(row: &str) -> bool {
    !row.contains(DELIMITER)
}

/// Map a three-letter month abbreviation to its two-digit number
pub fn month_number(abbr: &str) -> Result<&'static str, ParseError> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbr)
        .map(|(_, number)| *number)
        .ok_or_else(|| ParseError::UnknownMonth(abbr.to_string()))
}

/// Named fields of a parsed calendar row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCalendarRow {
    pub year: String,
    pub day: String,
    pub month: String,
    pub day_of_week: String,
    pub event: String,
    pub description: String,
}

impl RawCalendarRow {
    /// Split a delimited row into its six fields
    pub fn from_delimited(row: &str) -> Result<Self, ParseError> {
        let fields = split_fields(row, CALENDAR_FIELDS)?;
        Ok(Self {
            year: fields[0].to_string(),
            day: fields[1].to_string(),
            month: fields[2].to_string(),
            day_of_week: fields[3].to_string(),
            event: fields[4].to_string(),
            description: fields[5].to_string(),
        })
    }

    /// Resolve the date and event name
    pub fn into_event(self) -> Result<CalendarEvent, ParseError> {
        let day: u32 = self
            .day
            .trim()
            .parse()
            .map_err(|_| ParseError::malformed("day", format!("not a number: {:?}", self.day)))?;
        let month = month_number(&self.month)?;

        let event_name = if self.event == EMPTY_SENTINEL {
            self.description
        } else if self.description.contains(CLASSES_AS_USUAL) {
            format!("{}({})", self.event, self.description)
        } else {
            self.event
        };

        Ok(CalendarEvent {
            date: format!("{}/{month}/{day:02}", self.year),
            day_of_week: self.day_of_week,
            event_name,
        })
    }
}

/// Format a delimited calendar row into an event
pub fn format_event(row: &str) -> Result<CalendarEvent, ParseError> {
    RawCalendarRow::from_delimited(row)?.into_event()
}

/// Format a delimited calendar row into `date|dayOfWeek|eventName`
pub fn format_row(row: &str) -> Result<String, ParseError> {
    format_event(row).map(|event| event.to_delimited())
}

/// Parse and format every data row of a calendar table
///
/// Returns one entry per data row with its index in `rows`; header, filler
/// and year-only rows are left out. A failing row does not affect the others.
pub fn parse_table<S: AsRef<str>>(
    rows: &[Vec<S>],
) -> Vec<(usize, Result<CalendarEvent, ParseError>)> {
    parse_rows(rows)
        .into_iter()
        .enumerate()
        .filter(|(_, row)| is_data_row(row) && !is_year_marker(row))
        .map(|(index, row)| (index, format_event(&row)))
        .collect()
}
