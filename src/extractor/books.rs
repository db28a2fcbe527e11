//! Book tiles on a class listing page.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::result::BookEntry;
use crate::selector::{query_all, rules};
use crate::text;
use crate::url_utils::{has_fragment, resolve};

/// Collect the book tiles of class `class_number`, in document order.
///
/// Duplicates are kept; de-duplication is left to the caller.
#[must_use]
pub fn extract_books(doc: &Document, class_number: u8, base: &Url) -> Vec<BookEntry> {
    let prefix = format!("/books/class-{class_number}-");

    query_all(&doc.select("html"), rules::book_tile)
        .iter()
        .filter_map(|anchor| book_entry(anchor, &prefix, base))
        .collect()
}

fn book_entry(anchor: &Selection, prefix: &str, base: &Url) -> Option<BookEntry> {
    let href = dom::get_attribute(anchor, "href")?;
    if !href.contains(prefix) || has_fragment(&href) {
        return None;
    }

    let img = dom::query_selector(anchor, "img");

    let name = img
        .as_ref()
        .and_then(|img| dom::get_attribute(img, "alt"))
        .and_then(|alt| text::non_empty(&alt))
        .or_else(|| text::non_empty(&dom::text_content(anchor)))?;

    let image_url = img
        .as_ref()
        .and_then(|img| {
            dom::non_empty_attribute(img, "src").or_else(|| dom::non_empty_attribute(img, "data-src"))
        })
        .map(|src| resolve(base, &src));

    Some(BookEntry {
        name,
        endpoint: href,
        image_url,
    })
}
