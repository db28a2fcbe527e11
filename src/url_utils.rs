//! URL Utility Functions
//!
//! Resolution of relative, protocol-relative and absolute references
//! against the site root, plus host checks used to guard the video
//! extractor.

use url::Url;

/// Check if a string is a valid absolute `http(s)` URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://, in any case
    let has_http_scheme = ["http://", "https://"].iter().any(|scheme| {
        s.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    if !has_http_scheme {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Convert a reference to absolute form against `base`.
///
/// * `//host/path` gets the base scheme.
/// * `/path` gets the base origin.
/// * Absolute URLs are returned unchanged.
/// * Other relative references are joined against `base`.
///
/// # Examples
/// ```
/// use url::Url;
/// use doubtnut_scraper::url_utils::resolve;
///
/// let base = Url::parse("https://www.doubtnut.com").unwrap();
/// assert_eq!(resolve(&base, "//cdn.doubtnut.com/a.png"), "https://cdn.doubtnut.com/a.png");
/// assert_eq!(resolve(&base, "/books/class-11"), "https://www.doubtnut.com/books/class-11");
/// assert_eq!(resolve(&base, "https://other.com/x"), "https://other.com/x");
/// ```
#[must_use]
pub fn resolve(base: &Url, reference: &str) -> String {
    let reference = reference.trim();

    if reference.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if reference.starts_with("data:")
        || reference.starts_with("javascript:")
        || reference.starts_with("mailto:")
        || reference.starts_with("tel:")
    {
        return reference.to_string();
    }

    // If already absolute, return as-is
    let (is_abs, _) = is_absolute_url(reference);
    if is_abs {
        return reference.to_string();
    }

    if reference.starts_with("//") {
        return format!("{}:{reference}", base.scheme());
    }

    if reference.starts_with('/') {
        return format!("{}{reference}", origin(base));
    }

    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

/// `scheme://host[:port]` of a URL, without a trailing slash.
#[must_use]
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Extract the lowercased hostname of an absolute URL.
fn extract_hostname(url_str: &str) -> Option<String> {
    let (_, parsed) = is_absolute_url(url_str);
    parsed.and_then(|url| url.host_str().map(str::to_ascii_lowercase))
}

/// Check whether `url_str` is an absolute URL served from `domain` or one of its subdomains.
///
/// # Examples
/// ```
/// use doubtnut_scraper::url_utils::belongs_to;
///
/// assert!(belongs_to("https://www.doubtnut.com/qna/1", "doubtnut.com"));
/// assert!(!belongs_to("https://notdoubtnut.com/qna/1", "doubtnut.com"));
/// ```
#[must_use]
pub fn belongs_to(url_str: &str, domain: &str) -> bool {
    let domain = domain.trim().trim_start_matches("www.").to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }

    extract_hostname(url_str).is_some_and(|host| {
        host == domain
            || host
                .strip_suffix(domain.as_str())
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Check whether a reference carries a `#` fragment.
#[inline]
#[must_use]
pub fn has_fragment(reference: &str) -> bool {
    reference.contains('#')
}

/// Check whether a reference points at a PDF file.
#[must_use]
pub fn is_pdf(reference: &str) -> bool {
    let path = reference.split(['?', '#']).next().unwrap_or(reference);
    path.to_ascii_lowercase().ends_with(".pdf")
}
