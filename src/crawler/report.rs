//! Partial crawl results

use std::fmt;

/// A page or row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlFailure {
    /// URI of the page or workbook; `uri#sheet` for timetable rows
    pub source: String,

    /// Row index within the source; `None` for whole-page failures
    pub row: Option<usize>,

    pub error: String,
}

impl fmt::Display for CrawlFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{} (row {row}): {}", self.source, self.error),
            None => write!(f, "{}: {}", self.source, self.error),
        }
    }
}

/// Records collected by a crawl plus everything that failed along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport<T> {
    pub records: Vec<T>,
    pub failures: Vec<CrawlFailure>,
}

impl<T> Default for CrawlReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> CrawlReport<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a whole-page failure
    pub fn page_failed(&mut self, source: &str, error: impl fmt::Display) {
        self.failures.push(CrawlFailure {
            source: source.to_string(),
            row: None,
            error: error.to_string(),
        });
    }

    /// Record a single-row failure
    pub fn row_failed(&mut self, source: &str, row: usize, error: impl fmt::Display) {
        self.failures.push(CrawlFailure {
            source: source.to_string(),
            row: Some(row),
            error: error.to_string(),
        });
    }

    /// Whether every page and row succeeded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
