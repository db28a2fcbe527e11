//! Element rules for the scan-style strategies.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{BOOK_TILE_CLASSES, CHAPTER_HEADING, INTERROGATIVE_CUE, SOLUTION_CLASS};
use crate::text;

/// Minimum normalized length (exclusive) of a question candidate.
const MIN_QUESTION_CHARS: usize = 20;

fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Anchor carrying any of the book-tile classes.
#[must_use]
pub fn book_tile(sel: &Selection) -> bool {
    tag(sel) == "a"
        && BOOK_TILE_CLASSES
            .iter()
            .any(|class| dom::has_class_token(sel, class))
}

/// `h3` reading like `Chapter 4: ...`.
#[must_use]
pub fn chapter_heading(sel: &Selection) -> bool {
    tag(sel) == "h3" && CHAPTER_HEADING.is_match(&dom::text_content(sel))
}

/// Leaf `p`, `div` or `span` whose text reads like a question.
#[must_use]
pub fn question_candidate(sel: &Selection) -> bool {
    if !matches!(tag(sel).as_str(), "p" | "div" | "span") || !dom::is_leaf(sel) {
        return false;
    }

    let raw = dom::text_content(sel);
    INTERROGATIVE_CUE.is_match(&raw) && text::normalize(&raw).chars().count() > MIN_QUESTION_CHARS
}

/// `div` or `section` whose class names mention a solution or answer.
#[must_use]
pub fn solution_container(sel: &Selection) -> bool {
    matches!(tag(sel).as_str(), "div" | "section")
        && dom::get_attribute(sel, "class").is_some_and(|class| SOLUTION_CLASS.is_match(&class))
}
