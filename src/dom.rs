//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate so the extractors read as a list
//! of lookups rather than selection plumbing. Every helper tolerates empty
//! selections and missing attributes.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating blank values as missing
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check whether the element's `class` attribute contains `token` as a whole word
#[must_use]
pub fn has_class_token(sel: &Selection, token: &str) -> bool {
    sel.attr("class")
        .is_some_and(|class| class.split_whitespace().any(|c| c == token))
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

// === Querying ===

/// Query the first descendant matching a CSS selector
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select(selector);
    found.nodes().first().map(|node| Selection::from(*node))
}

/// Query the first element of the document matching a CSS selector
#[must_use]
pub fn query_document<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let found = doc.select(selector);
    found.nodes().first().map(|node| Selection::from(*node))
}

/// Every element matching a CSS selector, one selection per node, in document order
#[must_use]
pub fn select_each<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Document-level variant of [`select_each`]
#[must_use]
pub fn select_each_in<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Direct element children with the given tag name
#[must_use]
pub fn child_elements<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    children(sel)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|child| tag_name(child).as_deref() == Some(tag))
        .collect()
}

/// Check whether an element has no element children
#[must_use]
pub fn is_leaf(sel: &Selection) -> bool {
    children(sel).nodes().is_empty()
}

/// `content` of the first `<meta>` whose `attr` equals `value`
///
/// Only the first matching tag is consulted; a blank `content` is a miss.
#[must_use]
pub fn meta_content(doc: &Document, attr: &str, value: &str) -> Option<String> {
    let meta = select_each_in(doc, "meta")
        .into_iter()
        .find(|m| get_attribute(m, attr).as_deref() == Some(value))?;
    non_empty_attribute(&meta, "content")
}
