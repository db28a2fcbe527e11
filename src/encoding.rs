//! Character encoding detection and transcoding of fetched pages.
//!
//! The charset is taken from the HTTP `Content-Type` header when present,
//! then from `<meta>` declarations in the document head, and defaults to
//! UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Bytes of the document inspected for a `<meta>` declaration.
const SNIFF_LEN: usize = 1024;

/// Detect character encoding from a `Content-Type` header and the HTML bytes.
#[must_use]
pub fn detect_encoding(content_type: Option<&str>, html: &[u8]) -> &'static Encoding {
    let from_header = content_type
        .and_then(|value| capture(&HEADER_CHARSET_RE, value))
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    // Only look at the document head for performance
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    capture(&CHARSET_META_RE, &head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences are replaced with `U+FFFD` rather than failing.
///
/// # Examples
///
/// ```
/// use doubtnut_scraper::encoding::decode_body;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// assert!(decode_body(Some("text/html; charset=ISO-8859-1"), html).contains("Café"));
/// ```
#[must_use]
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> String {
    let encoding = detect_encoding(content_type, body);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
