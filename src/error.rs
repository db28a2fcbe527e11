//! Error types for doubtnut-scraper.
//!
//! Only transport problems and rejected inputs are errors. Markup that is
//! missing or has drifted never produces an `Err`: extractors fall through
//! their strategy chains and return placeholders or empty lists instead.

/// Cause of a single failed HTTP attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The connection to the remote host could not be established.
    #[error("failed to connect")]
    Connect(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Status(u16),

    /// Any other transport failure (body read, redirect loop, TLS, ...).
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(err)
        }
    }
}

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be fetched after exhausting every retry.
    #[error("failed to fetch {url} after {attempts} attempt(s): {source}")]
    Fetch {
        url: String,
        attempts: u32,
        #[source]
        source: FetchError,
    },

    /// The input URL is malformed or outside the known origin.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Class number outside the range the site publishes (6 to 12).
    #[error("invalid class number {0}: must be between 6 and 12")]
    InvalidClass(u8),

    /// Every video strategy came up empty.
    #[error("no video content found on the page")]
    NoVideoContent,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// HTTP status of the last failed attempt, if the failure was a status error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch {
                source: FetchError::Status(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }

    /// True for failures caused by the network rather than by the input.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Client(_))
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
