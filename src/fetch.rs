//! Rate-limited, retried page fetching.
//!
//! Every attempt is preceded by the policy's `base_delay`; failed attempts
//! add a linear back-off before the next one. The last cause is kept so
//! callers can tell a timeout from an HTTP status failure.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, UPGRADE_INSECURE_REQUESTS,
};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::encoding::decode_body;
use crate::error::{Error, FetchError, Result};
use crate::options::{Options, RetryPolicy};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.5";

/// Cheap existence check for a remote asset.
pub trait AssetProbe {
    /// True when the asset answers with exactly `200 OK`.
    fn exists(&self, url: &str) -> bool;
}

/// Blocking HTTP fetcher sending a desktop-browser header set.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: HttpClient,
    probe_timeout: Duration,
}

impl Fetcher {
    /// Build a fetcher from client options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] when the TLS backend or header set cannot be initialized.
    pub fn new(options: &Options) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let http = HttpClient::builder()
            .user_agent(options.user_agent.as_str())
            .default_headers(headers)
            .gzip(true)
            .timeout(options.request_timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            http,
            probe_timeout: options.probe_timeout,
        })
    }

    /// GET `url` under `policy`, returning the body decoded to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] carrying the cause of the last attempt once
    /// every attempt has failed.
    pub fn fetch(&self, url: &str, policy: &RetryPolicy) -> Result<String> {
        let attempts = policy.attempts();
        let mut attempt = 1;

        loop {
            if !policy.base_delay.is_zero() {
                thread::sleep(policy.base_delay);
            }

            debug!(url, attempt, attempts, "fetching page");
            match self.get_once(url) {
                Ok(body) => {
                    debug!(url, attempt, bytes = body.len(), "fetched page");
                    return Ok(body);
                }
                Err(source) if attempt >= attempts => {
                    warn!(url, attempts, error = %source, "giving up on page");
                    return Err(Error::Fetch {
                        url: url.to_string(),
                        attempts,
                        source,
                    });
                }
                Err(source) => {
                    let backoff = policy.backoff(attempt);
                    warn!(url, attempt, error = %source, ?backoff, "fetch failed, retrying");
                    thread::sleep(backoff);
                    attempt += 1;
                }
            }
        }
    }

    fn get_once(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self.http.get(url).send()?.error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes()?;

        Ok(decode_body(content_type.as_deref(), &body))
    }
}

impl AssetProbe for Fetcher {
    fn exists(&self, url: &str) -> bool {
        match self.http.head(url).timeout(self.probe_timeout).send() {
            Ok(response) => response.status() == StatusCode::OK,
            Err(err) => {
                debug!(url, error = %err, "asset probe failed");
                false
            }
        }
    }
}
