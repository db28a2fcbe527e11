//! Configuration for the scraping client.
//!
//! The `Options` struct carries everything that used to be hardcoded on the
//! site: base URL, origin domain, video CDN, header identity and the retry
//! policies. Use `Default::default()` for the production site.

use std::time::Duration;

/// Desktop Chrome identity sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Retry and rate-limit policy for page fetches.
///
/// `base_delay` is slept before every attempt. After a failed attempt `n`
/// (1-based) an extra `base_delay * n` is slept before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Values below 1 are treated as 1.
    ///
    /// Default: `3`
    pub max_retries: u32,

    /// Pre-request delay and back-off unit.
    ///
    /// Default: `1s`
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// One attempt, no delay.
    #[must_use]
    pub const fn single_shot() -> Self {
        Self {
            max_retries: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Number of attempts actually made.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Back-off slept after failed attempt `attempt` (1-based).
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Configuration options for the scraping client.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use doubtnut_scraper::{Options, RetryPolicy};
///
/// let options = Options {
///     retry: RetryPolicy { max_retries: 5, base_delay: Duration::from_millis(250) },
///     ..Options::default()
/// };
/// assert_eq!(options.retry.attempts(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Site root that relative paths are resolved against.
    ///
    /// Default: `https://www.doubtnut.com`
    pub base_url: String,

    /// Registrable domain that video page URLs must belong to.
    ///
    /// Default: `doubtnut.com`
    pub origin_domain: String,

    /// Root of the video asset CDN used for structured video payloads.
    ///
    /// Default: `https://videos.doubtnut.com`
    pub video_cdn: String,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Policy for book, chapter, question and answer pages.
    pub retry: RetryPolicy,

    /// Policy for the video page fetch.
    ///
    /// Default: a single attempt without delay.
    pub video_retry: RetryPolicy,

    /// Timeout for each GET attempt.
    ///
    /// Default: `10s`
    pub request_timeout: Duration,

    /// Timeout for the HEAD probe that verifies video assets.
    ///
    /// Default: `5s`
    pub probe_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: "https://www.doubtnut.com".to_string(),
            origin_domain: "doubtnut.com".to_string(),
            video_cdn: "https://videos.doubtnut.com".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
            video_retry: RetryPolicy::single_shot(),
            request_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(5),
        }
    }
}
