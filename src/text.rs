//! Text normalization shared by every extractor.

use crate::patterns::{ENUMERATION_MARKERS, LINE_BREAK_TAG};

/// Convert raw extracted text into its canonical cleaned form.
///
/// Line-break markup becomes `\n` first. Text carrying enumeration markers
/// (`i)`, `a)`, ...) keeps one trimmed, non-empty line per line; everything
/// else collapses to single-spaced text.
///
/// The function is idempotent.
///
/// # Examples
///
/// ```
/// use doubtnut_scraper::text::normalize;
///
/// assert_eq!(normalize("  Find   the\n value  "), "Find the value");
/// assert_eq!(normalize("Choose:<br>a) 2<br/> b) 3 "), "Choose:\na) 2\nb) 3");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // Removing one tag can expose another (`<br<br>>`), so replace to a fixpoint.
    let mut text = raw.to_string();
    while LINE_BREAK_TAG.is_match(&text) {
        text = LINE_BREAK_TAG.replace_all(&text, "\n").into_owned();
    }

    if is_enumerated(&text) {
        text.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Check whether text looks like a structured, enumerated answer.
#[must_use]
pub fn is_enumerated(text: &str) -> bool {
    let lower = text.to_lowercase();
    ENUMERATION_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Normalize and drop the result when nothing is left.
#[must_use]
pub fn non_empty(raw: &str) -> Option<String> {
    let text = normalize(raw);
    (!text.is_empty()).then_some(text)
}
