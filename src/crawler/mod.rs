//! Academic office crawling
//!
//! This module walks the site's menus, downloads the calendar pages and
//! timetable workbooks, and runs them through the parsers. Pages and rows
//! fail independently; every failure lands in the returned [`CrawlReport`].

pub mod fetcher;
pub mod report;

use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::models::{CalendarEvent, LectureRecord};
use crate::parser::{
    calendar, extract_calendar_rows, extract_menu_links, extract_timetable_links, read_workbook,
    timetable,
};
use crate::utils::error::{CrawlerError, ParseError};

pub use fetcher::SiteFetcher;
pub use report::{CrawlFailure, CrawlReport};

/// Crawler for the academic calendar and course timetables
pub struct AcademicCrawler {
    fetcher: SiteFetcher,
    config: Config,
}

impl AcademicCrawler {
    /// Create a crawler from configuration
    ///
    /// # Errors
    ///
    /// Returns `CrawlerError::Fetch` if the HTTP client cannot be created
    pub fn new(config: Config) -> Result<Self, CrawlerError> {
        let fetcher = SiteFetcher::from_config(&config)?;
        Ok(Self { fetcher, config })
    }

    /// Create a crawler around an existing fetcher
    #[must_use]
    pub fn with_fetcher(fetcher: SiteFetcher, config: Config) -> Self {
        Self { fetcher, config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Links listed under one of the main page's sidebar menus
    ///
    /// # Errors
    ///
    /// Returns an error when the main page cannot be fetched or has no such menu
    pub async fn menu_links(&self, menu: &str) -> Result<Vec<String>, CrawlerError> {
        let html = self.fetcher.fetch_text(&self.config.site.main_page_path).await?;
        let links = extract_menu_links(&html, menu, self.fetcher.base_url())?;
        info!(menu, links = links.len(), "Menu links extracted");
        Ok(links)
    }

    /// Every event of every academic calendar page
    #[instrument(skip(self))]
    pub async fn calendar_events(&self) -> CrawlReport<CalendarEvent> {
        let mut report = CrawlReport::new();

        let pages = match self.menu_links(&self.config.site.calendar_menu).await {
            Ok(pages) => pages,
            Err(e) => {
                warn!(error = %e, "Calendar menu unavailable");
                report.page_failed(&self.config.main_page_url(), e);
                return report;
            }
        };

        for uri in pages {
            match self.calendar_page(&uri).await {
                Ok(rows) => {
                    let before = report.records.len();
                    for (row, result) in calendar::parse_table(&rows) {
                        match result {
                            Ok(event) => report.records.push(event),
                            Err(e) => {
                                warn!(uri = %uri, row, error = %e, "Skipping calendar row");
                                report.row_failed(&uri, row, e);
                            }
                        }
                    }
                    info!(uri = %uri, events = report.records.len() - before, "Calendar page parsed");
                }
                Err(e) => {
                    warn!(uri = %uri, error = %e, "Skipping calendar page");
                    report.page_failed(&uri, e);
                }
            }
        }

        report
    }

    /// Every lecture of every timetable workbook
    #[instrument(skip(self))]
    pub async fn lectures(&self) -> CrawlReport<LectureRecord> {
        let mut report = CrawlReport::new();

        let workbooks = match self.timetable_links().await {
            Ok(links) => links,
            Err(e) => {
                warn!(error = %e, "Timetable page unavailable");
                report.page_failed(&self.config.main_page_url(), e);
                return report;
            }
        };

        for uri in workbooks {
            let sheets = match self.fetcher.fetch_bytes(&uri).await {
                Ok(bytes) => read_workbook(&bytes).map_err(CrawlerError::from),
                Err(e) => Err(e.into()),
            };

            let sheets = match sheets {
                Ok(sheets) => sheets,
                Err(e) => {
                    warn!(uri = %uri, error = %e, "Skipping timetable workbook");
                    report.page_failed(&uri, e);
                    continue;
                }
            };

            let before = report.records.len();
            for sheet in &sheets {
                let source = format!("{uri}#{}", sheet.name);
                for (row, result) in timetable::parse_sheet(sheet) {
                    match result {
                        Ok(lecture) => report.records.push(lecture),
                        Err(e) => {
                            warn!(source = %source, row, error = %e, "Skipping timetable row");
                            report.row_failed(&source, row, e);
                        }
                    }
                }
            }
            info!(uri = %uri, lectures = report.records.len() - before, "Timetable workbook parsed");
        }

        report
    }

    async fn calendar_page(&self, uri: &str) -> Result<Vec<Vec<String>>, CrawlerError> {
        let html = self.fetcher.fetch_text(uri).await?;
        Ok(extract_calendar_rows(&html)?)
    }

    /// Spreadsheet links from the first page of the timetable menu
    async fn timetable_links(&self) -> Result<Vec<String>, CrawlerError> {
        let pages = self.menu_links(&self.config.site.timetable_menu).await?;
        let page = pages
            .first()
            .ok_or_else(|| ParseError::NotFound("timetable menu entries".to_string()))?;

        let html = self.fetcher.fetch_text(page).await?;
        Ok(extract_timetable_links(&html, self.fetcher.base_url())?)
    }
}
