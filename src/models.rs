// Core data structures for apubot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::parser::{DELIMITER, DELIMITER_STR};

/// One academic calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarEvent {
    pub date: String, // yyyy/mm/dd
    pub day_of_week: String,
    pub event_name: String,
}

impl CalendarEvent {
    /// Render as `date|dayOfWeek|eventName`
    pub fn to_delimited(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.date, self.day_of_week, self.event_name
        )
    }

    /// Parse the date field, `None` when it is not a real calendar date
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y/%m/%d").ok()
    }
}

impl std::fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_delimited())
    }
}

/// One lecture from a course timetable spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LectureRecord {
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
    pub semester: String,
    pub curriculum: String,
}

impl LectureRecord {
    /// Lowercase searchable strings derived from the record
    ///
    /// Subject names, subject id and instructor names; empty fields are left out.
    pub fn search_tags(&self) -> HashSet<String> {
        [
            &self.subject_name_foreign,
            &self.subject_name_local,
            &self.subject_id,
            &self.instructor_foreign,
            &self.instructor_local,
        ]
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(|value| value.to_lowercase())
        .collect()
    }

    /// Check whether any tag contains the (already lowercased) query
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.search_tags()
            .iter()
            .any(|tag| tag.contains(lowered_query))
    }

    /// One-line listing used by the console commands
    pub fn summary_line(&self) -> String {
        [
            self.term.as_str(),
            self.day_of_week.as_str(),
            self.subject_name_foreign.as_str(),
            self.subject_id.as_str(),
            self.semester.as_str(),
            self.curriculum.as_str(),
            self.building_floor.as_str(),
            self.classroom.as_str(),
            self.period.as_str(),
            self.instructor_foreign.as_str(),
            self.grade.as_str(),
        ]
        .join(DELIMITER_STR)
    }

    /// Syllabus search URL for this subject
    pub fn syllabus_url(&self, search_base: &str) -> String {
        format!("{search_base}{}", self.subject_id)
    }
}
