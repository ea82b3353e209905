//! apubot - Academic office scraper
//!
//! Collects the academic calendar and the course timetables published by the
//! university academic office and turns them into typed, searchable records.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Site crawling with rate limiting and per-page isolation
//! - [`parser`] - Cell normalization, row parsing and field formatting
//! - [`models`] - Core data structures and types
//! - [`storage`] - In-memory lecture search and file export
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use apubot::config::Config;
//! use apubot::crawler::AcademicCrawler;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let crawler = AcademicCrawler::new(config)?;
//!     let report = crawler.calendar_events().await;
//!     for event in &report.records {
//!         println!("{event}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{AcademicCrawler, CrawlFailure, CrawlReport, SiteFetcher};
    pub use crate::error::{Error, Result};
    pub use crate::models::{CalendarEvent, LectureRecord};
    pub use crate::storage::{ExportFormat, LectureStore};
}

// Direct re-exports for convenience
pub use models::{CalendarEvent, LectureRecord};
