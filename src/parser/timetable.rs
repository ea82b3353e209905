//! Course timetable rows
//!
//! Each timetable worksheet row holds fifteen cells; the worksheet's
//! semester/curriculum label is appended as a sixteenth field. Coded values
//! (building-floor codes, weekday prefixes, full-width digits, grade markers)
//! are expanded into display text by [`format_record`].

use unicode_normalization::UnicodeNormalization;

use crate::models::LectureRecord;
use crate::parser::sanitize::strip_line_breaks;
use crate::parser::workbook::TimetableSheet;
use crate::parser::{split_fields, DELIMITER};
use crate::utils::error::ParseError;
use crate::utils::ordinal;

/// Cells per worksheet row
pub const TIMETABLE_COLUMNS: usize = 15;

/// Fields per parsed row: the cells plus the sheet label
pub const TIMETABLE_FIELDS: usize = TIMETABLE_COLUMNS + 1;

/// Sentinel for an absent cell
pub const NOT_AVAILABLE: &str = "NA";

/// Header text of the subject id column
pub const SUBJECT_ID_HEADER: &str = "講義CD/Subject CD";

/// Placeholder for unscheduled rooms and periods
pub const TO_BE_ANNOUNCED: &str = "T.B.A.";

/// Day-of-week text for intensive sessions
pub const SESSION: &str = "Session";

/// Full-width Roman numeral two used in building and room codes
const ROMAN_TWO: char = '\u{2161}';

/// Field positions of a parsed timetable row
pub mod column {
    pub const TERM: usize = 0;
    pub const DAY_OF_WEEK: usize = 1;
    pub const PERIOD: usize = 2;
    pub const CLASSROOM: usize = 3;
    pub const BUILDING_FLOOR: usize = 4;
    pub const SUBJECT_ID: usize = 5;
    pub const SUBJECT_NAME_LOCAL: usize = 6;
    pub const SUBJECT_NAME_FOREIGN: usize = 7;
    pub const INSTRUCTOR_LOCAL: usize = 8;
    pub const INSTRUCTOR_FOREIGN: usize = 9;
    pub const LANGUAGE: usize = 10;
    pub const GRADE: usize = 11;
    pub const FIELD: usize = 12;
    pub const AP_SCORE_1: usize = 13;
    pub const AP_SCORE_2: usize = 14;
    pub const SHEET_CONTEXT: usize = 15;
}

/// Join one worksheet row into its delimited form
///
/// Absent cells become `NA`. Returns `Ok(None)` for blank and header rows,
/// recognised by their subject id.
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` when the row does not have exactly
/// fifteen cells.
pub fn parse_row<S: AsRef<str>>(
    cells: &[Option<S>],
    sheet_context: &str,
) -> Result<Option<String>, ParseError> {
    if cells.len() != TIMETABLE_COLUMNS {
        return Err(ParseError::malformed(
            "row",
            format!(
                "expected {TIMETABLE_COLUMNS} cells, found {}",
                cells.len()
            ),
        ));
    }

    let subject_id = cells[column::SUBJECT_ID]
        .as_ref()
        .map(|cell| strip_line_breaks(cell.as_ref()));
    match subject_id.as_deref() {
        None | Some(NOT_AVAILABLE) | Some(SUBJECT_ID_HEADER) => return Ok(None),
        Some(_) => {}
    }

    let mut row = String::new();
    for cell in cells {
        match cell {
            Some(value) => row.push_str(&strip_line_breaks(value.as_ref())),
            None => row.push_str(NOT_AVAILABLE),
        }
        row.push(DELIMITER);
    }
    row.push_str(sheet_context);

    Ok(Some(row))
}

/// Named fields of a parsed timetable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTimetableRow {
    pub term: String,
    pub day_of_week: String,
    pub period: String,
    pub classroom: String,
    pub building_floor: String,
    pub subject_id: String,
    pub subject_name_local: String,
    pub subject_name_foreign: String,
    pub instructor_local: String,
    pub instructor_foreign: String,
    pub language: String,
    pub grade: String,
    pub field: String,
    pub ap_score1: String,
    pub ap_score2: String,
    pub sheet_context: String,
}

impl RawTimetableRow {
    /// Split a delimited row into its sixteen fields
    pub fn from_delimited(row: &str) -> Result<Self, ParseError> {
        let fields = split_fields(row, TIMETABLE_FIELDS)?;
        let get = |index: usize| fields[index].to_string();
        Ok(Self {
            term: get(column::TERM),
            day_of_week: get(column::DAY_OF_WEEK),
            period: get(column::PERIOD),
            classroom: get(column::CLASSROOM),
            building_floor: get(column::BUILDING_FLOOR),
            subject_id: get(column::SUBJECT_ID),
            subject_name_local: get(column::SUBJECT_NAME_LOCAL),
            subject_name_foreign: get(column::SUBJECT_NAME_FOREIGN),
            instructor_local: get(column::INSTRUCTOR_LOCAL),
            instructor_foreign: get(column::INSTRUCTOR_FOREIGN),
            language: get(column::LANGUAGE),
            grade: get(column::GRADE),
            field: get(column::FIELD),
            ap_score1: get(column::AP_SCORE_1),
            ap_score2: get(column::AP_SCORE_2),
            sheet_context: get(column::SHEET_CONTEXT),
        })
    }

    /// Expand the coded fields into a lecture record
    pub fn into_record(self) -> Result<LectureRecord, ParseError> {
        let (semester, curriculum) = split_semester_curriculum(&self.sheet_context)?;

        Ok(LectureRecord {
            day_of_week: format_day_of_week(&self.day_of_week)?,
            period: format_period(&self.period),
            classroom: format_classroom(&self.classroom),
            building_floor: format_building_floor(&self.building_floor)?,
            grade: format_grade(&self.grade)?,
            semester,
            curriculum,
            term: self.term,
            subject_id: self.subject_id,
            subject_name_local: self.subject_name_local,
            subject_name_foreign: self.subject_name_foreign,
            instructor_local: self.instructor_local,
            instructor_foreign: self.instructor_foreign,
            language: self.language,
            field: self.field,
            ap_score1: self.ap_score1,
            ap_score2: self.ap_score2,
        })
    }
}

/// Format a delimited timetable row into a lecture record
pub fn format_record(row: &str) -> Result<LectureRecord, ParseError> {
    RawTimetableRow::from_delimited(row)?.into_record()
}

/// Parse and format every lecture row of a worksheet
///
/// Returns one entry per non-skipped row with its index in the sheet.
pub fn parse_sheet(sheet: &TimetableSheet) -> Vec<(usize, Result<LectureRecord, ParseError>)> {
    sheet
        .rows
        .iter()
        .enumerate()
        .filter_map(|(index, cells)| match parse_row(cells, &sheet.label) {
            Ok(Some(row)) => Some((index, format_record(&row))),
            Ok(None) => None,
            Err(e) => Some((index, Err(e))),
        })
        .collect()
}

/// Split a sheet label into `(semester, curriculum)`
///
/// `"Spring Semester Timetable (For 2017 Curriculum students)"` becomes
/// `("Spring", "2017 Curriculum")`.
pub fn split_semester_curriculum(label: &str) -> Result<(String, String), ParseError> {
    let (left, right) = label
        .split_once('(')
        .ok_or_else(|| ParseError::malformed("semester", format!("no `(` in {label:?}")))?;

    let semester = left.replace("Timetable", "").trim().replace(" Semester", "");

    let right = right.replace(')', "");
    if right.chars().count() < 4 {
        return Err(ParseError::malformed(
            "curriculum",
            format!("too short: {right:?}"),
        ));
    }
    let curriculum = right.chars().skip(4).collect::<String>().replace(" students", "");

    Ok((semester, curriculum))
}

/// Expand a building-floor code such as `A-2` or `C-2F`
///
/// The last character is the floor digit; everything before it names the
/// building.
///
/// # Examples
///
/// ```
/// use apubot::parser::timetable::format_building_floor;
///
/// assert_eq!(format_building_floor("C-2F").unwrap(), "C building 2nd floor");
/// assert_eq!(format_building_floor("T.B.A.").unwrap(), "T.B.A.");
/// ```
pub fn format_building_floor(code: &str) -> Result<String, ParseError> {
    if code == TO_BE_ANNOUNCED {
        return Ok(code.to_string());
    }

    let trimmed = code.strip_suffix('F').unwrap_or(code);
    let mut chars = trimmed.chars();
    let floor = chars
        .next_back()
        .ok_or_else(|| ParseError::malformed("building_floor", format!("too short: {code:?}")))?;
    let building = chars.as_str();
    if building.is_empty() {
        return Err(ParseError::malformed(
            "building_floor",
            format!("no building in {code:?}"),
        ));
    }

    let floor: String = floor.to_string().nfkc().collect();
    if floor.is_empty() || !floor.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::malformed(
            "building_floor",
            format!("no floor number in {code:?}"),
        ));
    }

    let building = building
        .replace('-', " building ")
        .replace(ROMAN_TWO, "II");

    Ok(format!("{building}{} floor", ordinal(&floor)))
}

/// Strip the weekday prefix code, e.g. `1.Mon` or `月/Mon.` to `Mon`
pub fn format_day_of_week(text: &str) -> Result<String, ParseError> {
    if text.contains(SESSION) {
        return Ok(SESSION.to_string());
    }
    if text.chars().count() < 2 {
        return Err(ParseError::malformed(
            "day_of_week",
            format!("too short: {text:?}"),
        ));
    }

    let day: String = text.chars().skip(2).collect();
    Ok(day.trim_end_matches('.').to_string())
}

/// Render a period number as `1st Period`
pub fn format_period(text: &str) -> String {
    if text.contains(TO_BE_ANNOUNCED) {
        return TO_BE_ANNOUNCED.to_string();
    }

    let digits: String = text.nfkc().collect();
    format!("{} Period", ordinal(digits.trim()))
}

/// Replace the full-width numeral in a room name
pub fn format_classroom(text: &str) -> String {
    text.replace(ROMAN_TWO, "II ")
}

/// Render a grade such as `1回生` as `1st Year`
///
/// The two characters after the leading digit are a fixed-width locale marker.
pub fn format_grade(text: &str) -> Result<String, ParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 3 {
        return Err(ParseError::malformed("grade", format!("too short: {text:?}")));
    }

    let number: String = chars[..1].iter().chain(&chars[3..]).collect();
    Ok(format!("{} Year", ordinal(&number)))
}
