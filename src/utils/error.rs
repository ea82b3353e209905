//! Error types for the apubot scraper
//!
//! This module defines the domain error types used throughout the application.

use thiserror::Error;

/// Errors that can occur during HTTP fetching operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server error with status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// The last attempt timed out
    #[error("Request timeout")]
    Timeout,

    /// Maximum retry attempts exceeded
    #[error("Maximum retry attempts exceeded")]
    MaxRetriesExceeded,

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while extracting or normalizing scraped content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected page, menu or node is missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// The site rendered its own error page with a success status
    #[error("Site returned an error page: {title}")]
    SiteErrorPage { title: String },

    /// Month text outside the Jan..Dec abbreviation table
    #[error("Unknown month: {0:?}")]
    UnknownMonth(String),

    /// A row field does not have the expected shape
    #[error("Malformed row field `{field}`: {detail}")]
    MalformedRow { field: String, detail: String },

    /// The spreadsheet could not be opened
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// A CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

impl ParseError {
    /// Create a malformed row error for the named field
    pub fn malformed(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedRow {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// General crawler errors
#[derive(Error, Debug)]
pub enum CrawlerError {
    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
