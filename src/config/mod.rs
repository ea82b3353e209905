//! Configuration management for apubot
//!
//! This module handles loading and validating configuration from environment variables
//! and TOML files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://en.apu.ac.jp";
const DEFAULT_MAIN_PAGE_PATH: &str = "/academic/top/curriculum_17.html/?c=17";
const DEFAULT_SYLLABUS_URL: &str = "https://portal2.apu.ac.jp/campusp/slbssbdr.do?value%28risyunen%29=2018&value%28semekikn%29=2&value%28kougicd%29=";

/// Upper bound on retry attempts per request
pub const MAX_RETRIES_LIMIT: u32 = 10;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crawler configuration
    pub crawler: CrawlerConfig,

    /// Academic office site layout
    pub site: SiteConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Crawler-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Rate limit (requests per second)
    pub rate_limit: u32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Retry attempts for 429/5xx responses and timeouts
    pub max_retries: u32,

    /// User agent string
    pub user_agent: String,
}

/// Where the academic office pages live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host every relative link is resolved against
    pub base_url: String,

    /// Path of the page carrying the sidebar menus
    pub main_page_path: String,

    /// Menu number of the academic calendar
    pub calendar_menu: String,

    /// Menu number of the course timetables
    pub timetable_menu: String,

    /// Syllabus search URL; the subject id is appended
    pub syllabus_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            rate_limit: 2,
            request_timeout_secs: 30,
            max_retries: 3,
            user_agent: format!("apubot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            main_page_path: String::from(DEFAULT_MAIN_PAGE_PATH),
            calendar_menu: String::from("01"),
            timetable_menu: String::from("03"),
            syllabus_url: String::from(DEFAULT_SYLLABUS_URL),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directives: the configured level for this crate, `warn`
    /// for dependencies; `verbose` raises both
    #[must_use]
    pub fn filter_directives(&self, verbose: bool) -> String {
        if verbose {
            String::from("apubot=debug,info")
        } else {
            format!("apubot={},warn", self.level)
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let rate_limit = std::env::var("APUBOT_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.crawler.rate_limit);

        let request_timeout_secs = std::env::var("APUBOT_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.crawler.request_timeout_secs);

        let max_retries = std::env::var("APUBOT_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.crawler.max_retries);

        let user_agent =
            std::env::var("APUBOT_USER_AGENT").unwrap_or(defaults.crawler.user_agent);

        let base_url = std::env::var("APUBOT_BASE_URL").unwrap_or(defaults.site.base_url);

        let syllabus_url =
            std::env::var("APUBOT_SYLLABUS_URL").unwrap_or(defaults.site.syllabus_url);

        let log_level = std::env::var("APUBOT_LOG_LEVEL").unwrap_or(defaults.logging.level);

        let log_format = std::env::var("APUBOT_LOG_FORMAT").unwrap_or(defaults.logging.format);

        Ok(Self {
            crawler: CrawlerConfig {
                rate_limit,
                request_timeout_secs,
                max_retries,
                user_agent,
            },
            site: SiteConfig {
                base_url,
                syllabus_url,
                ..defaults.site
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.crawler.rate_limit == 0 {
            anyhow::bail!("rate_limit must be positive");
        }

        if self.crawler.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be positive");
        }

        if self.crawler.max_retries > MAX_RETRIES_LIMIT {
            anyhow::bail!(
                "max_retries must be at most {MAX_RETRIES_LIMIT}, got {}",
                self.crawler.max_retries
            );
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Url::parse(&self.site.base_url)
            .with_context(|| format!("Invalid base_url: {}", self.site.base_url))?;

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.crawler.request_timeout_secs)
    }

    /// Absolute URL of the page carrying the sidebar menus
    #[must_use]
    pub fn main_page_url(&self) -> String {
        format!(
            "{}{}",
            self.site.base_url.trim_end_matches('/'),
            self.site.main_page_path
        )
    }
}
