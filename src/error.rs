//! Unified error handling for the apubot crate
//!
//! File export and configuration parsing report through [`Error`]. The
//! crawl path uses the domain errors re-exported here directly.

use std::io;
use thiserror::Error;

pub use crate::utils::error::{CrawlerError, FetchError, ParseError};

/// Unified error type for the apubot crate
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delimited output errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
