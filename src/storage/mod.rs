//! In-memory lecture store and file export
//!
//! Lectures are loaded once per run and searched linearly; nothing is
//! persisted between runs apart from explicit exports.

pub mod export;

use crate::models::LectureRecord;

pub use export::{write_calendar, write_lectures, ExportFormat};

/// Ordered, read-only collection of lectures
#[derive(Debug, Clone, Default)]
pub struct LectureStore {
    lectures: Vec<LectureRecord>,
}

impl LectureStore {
    #[must_use]
    pub fn new(lectures: Vec<LectureRecord>) -> Self {
        Self { lectures }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    /// All lectures in load order
    #[must_use]
    pub fn lectures(&self) -> &[LectureRecord] {
        &self.lectures
    }

    /// Lectures with a tag containing `query`, case-insensitively
    ///
    /// Results keep store order and hold each lecture at most once. An empty
    /// query returns every lecture with at least one tag.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&LectureRecord> {
        let query = query.to_lowercase();
        self.lectures
            .iter()
            .filter(|lecture| lecture.matches(&query))
            .collect()
    }
}

impl From<Vec<LectureRecord>> for LectureStore {
    fn from(lectures: Vec<LectureRecord>) -> Self {
        Self::new(lectures)
    }
}
