//! HTTP fetcher with rate limiting and retry
//!
//! This module provides the fetcher for the academic office site with:
//! - Rate limiting with governor
//! - Automatic retry with exponential backoff
//! - Relative link resolution against the site's base URL

use crate::config::Config;
use crate::utils::absolute_url;
use crate::utils::error::FetchError;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client, Response,
};
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{debug, warn};

/// Academic office fetcher
///
/// Requests are issued one at a time; each waits for the rate limiter.
pub struct SiteFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter to control request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Maximum number of retry attempts for failed requests
    max_retries: u32,

    /// Base delay in milliseconds for exponential backoff
    base_delay_ms: u64,

    /// Scheme and host relative links are resolved against
    base_url: String,
}

impl SiteFetcher {
    /// Create a fetcher from the crawler and site configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::with_config(
            &config.site.base_url,
            config.crawler.rate_limit,
            config.crawler.max_retries,
            config.request_timeout(),
            &config.crawler.user_agent,
        )
    }

    /// Create a fetcher with explicit settings
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL relative links are resolved against
    /// * `requests_per_second` - Maximum number of requests per second
    /// * `max_retries` - Maximum number of retry attempts
    /// * `timeout` - Request timeout duration
    /// * `user_agent` - User-Agent header value
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config(
        base_url: &str,
        requests_per_second: u32,
        max_retries: u32,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .cookie_store(true)
            .user_agent(user_agent)
            .default_headers(Self::default_headers())
            .build()?;

        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(rate);
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            max_retries,
            base_delay_ms: 1000,
            base_url: base_url.to_string(),
        })
    }

    /// Create a fetcher against a mock server with a short backoff
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_base_url(base_url: &str, max_retries: u32) -> Result<Self, FetchError> {
        let mut fetcher = Self::with_config(
            base_url,
            100,
            max_retries,
            Duration::from_secs(5),
            concat!("apubot/", env!("CARGO_PKG_VERSION")),
        )?;
        fetcher.base_delay_ms = 10;
        Ok(fetcher)
    }

    /// Base URL relative links are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page as text
    ///
    /// # Errors
    ///
    /// Returns various `FetchError` variants depending on the failure mode
    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.fetch(url).await?;
        Ok(response.text().await?)
    }

    /// Fetch a file as raw bytes
    ///
    /// # Errors
    ///
    /// Returns various `FetchError` variants depending on the failure mode
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.fetch(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        let full_url = absolute_url(&self.base_url, url)?;

        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        self.fetch_with_retry(&full_url).await
    }

    /// Fetch with exponential backoff retry logic
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Timeout` if the last attempt timed out and
    /// `FetchError::MaxRetriesExceeded` if all retries fail otherwise
    async fn fetch_with_retry(&self, url: &str) -> Result<Response, FetchError> {
        let mut last_error = FetchError::MaxRetriesExceeded;

        for attempt in 0..=self.max_retries {
            // Apply exponential backoff for retries
            if attempt > 0 {
                let delay = self.backoff_delay(attempt);
                debug!(url, attempt, delay_ms = delay.as_millis(), "Retrying request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        return Ok(response);
                    } else if Self::should_retry(status.as_u16()) {
                        warn!(url, status = status.as_u16(), attempt, "Retryable status");
                        last_error = FetchError::MaxRetriesExceeded;
                    } else {
                        return Err(FetchError::ServerError(status.as_u16()));
                    }
                }
                Err(e) if e.is_timeout() => {
                    warn!(url, attempt, "Request timed out");
                    last_error = FetchError::Timeout;
                }
                Err(e) if e.is_connect() || e.is_request() => {
                    warn!(url, attempt, error = %e, "Request failed");
                    last_error = FetchError::MaxRetriesExceeded;
                }
                Err(e) => return Err(FetchError::Http(e)),
            }
        }

        Err(last_error)
    }

    /// Delay before retry `attempt`, doubling from the base delay
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Determine if a status code should trigger a retry
    ///
    /// Retry on 429, 500, 502, 503 and 504; every other failure status is final.
    fn should_retry(status: u16) -> bool {
        matches!(status, 429 | 500 | 502 | 503 | 504)
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9,ja;q=0.8"));
        headers
    }
}
