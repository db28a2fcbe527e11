//! Chapter hierarchy of a book page.
//!
//! Book pages nest chapters as `<ol><li><h3>Chapter N: ...</h3><ol><li><a>`.
//! When that list is missing, chapter headings are scanned directly and
//! their sibling links filtered by keyword.

use dom_query::{Document, Selection};
use url::Url;

use super::{non_empty_vec, run_chain, Strategy};
use crate::dom;
use crate::patterns::SECTION_KEYWORDS;
use crate::result::{ChapterEntry, SubSection};
use crate::selector::{query_all, rules};
use crate::text;
use crate::url_utils::{has_fragment, is_pdf, resolve};

const CHAIN: &[Strategy<Url, Vec<ChapterEntry>>] = &[
    Strategy {
        name: "nested_list",
        run: nested_list,
    },
    Strategy {
        name: "heading_scan",
        run: heading_scan,
    },
];

/// Extract the chapters of a book page.
///
/// Every returned chapter has at least one sub-section. PDF links are
/// resolved against `base`.
#[must_use]
pub fn extract_chapters(doc: &Document, base: &Url) -> Vec<ChapterEntry> {
    run_chain(CHAIN, doc, base).unwrap_or_default()
}

fn nested_list(doc: &Document, base: &Url) -> Option<Vec<ChapterEntry>> {
    let list = dom::query_document(doc, "ol.list-none")?;

    let chapters = dom::child_elements(&list, "li")
        .iter()
        .filter_map(|item| list_chapter(item, base))
        .collect();
    non_empty_vec(chapters)
}

fn list_chapter(item: &Selection, base: &Url) -> Option<ChapterEntry> {
    let heading = dom::query_selector(item, "h3")?;
    let chapter_name = text::normalize(&dom::text_content(&heading));
    if !chapter_name.to_lowercase().contains("chapter") {
        return None;
    }

    let mut sub_sections = Vec::new();
    let mut pdf_link = None;

    if let Some(nested) = dom::query_selector(item, "ol") {
        for sub_item in dom::select_each(&nested, "li") {
            if let Some(section) = sub_section(&sub_item) {
                sub_sections.push(section);
            }
            if let Some(pdf) = first_pdf(&sub_item) {
                pdf_link = Some(pdf);
            }
        }
    }

    if sub_sections.is_empty() {
        return None;
    }

    Some(ChapterEntry {
        chapter_name,
        sub_sections,
        pdf_link: pdf_link.or_else(|| first_pdf(item)).map(|href| resolve(base, &href)),
    })
}

fn sub_section(sub_item: &Selection) -> Option<SubSection> {
    let anchor = dom::query_selector(sub_item, "a.link").or_else(|| {
        dom::select_each(sub_item, "a[href]")
            .into_iter()
            .find(|a| !dom::get_attribute(a, "href").is_some_and(|href| is_pdf(&href)))
    })?;

    let href = dom::non_empty_attribute(&anchor, "href")?;
    if has_fragment(&href) {
        return None;
    }

    Some(SubSection {
        name: text::non_empty(&dom::text_content(&anchor))?,
        endpoint: href,
    })
}

fn first_pdf(scope: &Selection) -> Option<String> {
    dom::select_each(scope, "a[href]")
        .iter()
        .filter_map(|a| dom::get_attribute(a, "href"))
        .find(|href| is_pdf(href))
}

fn heading_scan(doc: &Document, base: &Url) -> Option<Vec<ChapterEntry>> {
    let chapters = query_all(&doc.select("html"), rules::chapter_heading)
        .iter()
        .filter_map(|heading| heading_chapter(heading, base))
        .collect();
    non_empty_vec(chapters)
}

fn heading_chapter(heading: &Selection, base: &Url) -> Option<ChapterEntry> {
    let mut sub_sections = Vec::new();
    let mut pdf_link = None;

    for anchor in dom::select_each(&dom::parent(heading), "a[href]") {
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };

        if is_pdf(&href) {
            pdf_link = Some(resolve(base, &href));
            continue;
        }

        let Some(name) = text::non_empty(&dom::text_content(&anchor)) else {
            continue;
        };
        if is_section_link(&href, &name) {
            sub_sections.push(SubSection {
                name,
                endpoint: href,
            });
        }
    }

    if sub_sections.is_empty() {
        return None;
    }

    Some(ChapterEntry {
        chapter_name: text::normalize(&dom::text_content(heading)),
        sub_sections,
        pdf_link,
    })
}

fn is_section_link(href: &str, name: &str) -> bool {
    if !href.starts_with("/books/") || !href.contains("chapter") || has_fragment(href) {
        return false;
    }
    let name = name.to_lowercase();
    SECTION_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}
