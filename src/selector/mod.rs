//! Selector Infrastructure
//!
//! Rules are plain predicates over a [`Selection`]; `query_all` walks every
//! descendant of a root in document order and keeps the ones that match.
//! The concrete rules used by the scan-style fallbacks live in [`rules`].

use dom_query::Selection;

pub mod rules;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule, in document order
///
/// # Example
///
/// ```rust
/// use doubtnut_scraper::{dom, selector};
///
/// let doc = dom::parse(r#"<div><p class="content">a</p><p>b</p><p class="content">c</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_content_class(sel: &dom_query::Selection) -> bool {
///     dom::has_class_token(sel, "content")
/// }
///
/// assert_eq!(selector::query_all(&root, has_content_class).len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn is_target(sel: &Selection) -> bool {
        dom::has_class_token(sel, "target")
    }

    #[test]
    fn test_query_document_order() {
        let doc = dom::parse(
            r#"
            <div>
                <section>
                    <p class="target">Deep first</p>
                </section>
                <p class="target">Shallow second</p>
            </div>
        "#,
        );
        let root = doc.select("div");

        let texts: Vec<String> = query_all(&root, is_target)
            .iter()
            .map(|s| dom::text_content(s).to_string())
            .collect();
        assert_eq!(texts, vec!["Deep first", "Shallow second"]);
    }

    #[test]
    fn test_query_all_finds_all_matches() {
        let doc = dom::parse(
            r#"
            <div>
                <p class="target">1</p>
                <span>Not target</span>
                <p class="target">2</p>
            </div>
        "#,
        );
        let root = doc.select("div");

        let texts: Vec<String> = query_all(&root, is_target)
            .iter()
            .map(|s| dom::text_content(s).to_string())
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_no_match() {
        let doc = dom::parse("<div><p>content</p></div>");
        let root = doc.select("div");

        assert!(query_all(&root, is_target).is_empty());
    }
}
