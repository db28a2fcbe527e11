//! Question links on a chapter section page.

use dom_query::{Document, Selection};

use super::{non_empty_vec, run_chain, Strategy};
use crate::dom;
use crate::patterns::QNA_PATH;
use crate::result::QuestionEntry;
use crate::selector::{query_all, rules};
use crate::text;

const CHAIN: &[Strategy<(), Vec<QuestionEntry>>] = &[
    Strategy {
        name: "qna_anchors",
        run: qna_anchors,
    },
    Strategy {
        name: "interrogative_scan",
        run: interrogative_scan,
    },
];

/// Extract the question links of a section page, in document order.
///
/// An empty vector means the page carried no recognizable question.
#[must_use]
pub fn extract_questions(doc: &Document) -> Vec<QuestionEntry> {
    run_chain(CHAIN, doc, &()).unwrap_or_default()
}

/// Identifier of a `/qna/<digits>` path.
#[must_use]
pub fn qna_id(href: &str) -> Option<String> {
    QNA_PATH
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn qna_href(anchor: &Selection) -> Option<String> {
    dom::get_attribute(anchor, "href").filter(|href| QNA_PATH.is_match(href))
}

fn qna_anchors(doc: &Document, _: &()) -> Option<Vec<QuestionEntry>> {
    let questions = dom::select_each_in(doc, "a[href]")
        .iter()
        .filter_map(|anchor| {
            let href = qna_href(anchor)?;
            let question = text::non_empty(&dom::text_content(anchor))?;
            Some(QuestionEntry {
                qna_id: qna_id(&href),
                question,
                answer_endpoint: href,
            })
        })
        .collect();
    non_empty_vec(questions)
}

// Question text sits in a leaf element; its link is a sibling.
fn interrogative_scan(doc: &Document, _: &()) -> Option<Vec<QuestionEntry>> {
    let questions = query_all(&doc.select("html"), rules::question_candidate)
        .iter()
        .filter_map(|candidate| {
            let href = dom::select_each(&dom::parent(candidate), "a[href]")
                .iter()
                .find_map(qna_href)?;
            Some(QuestionEntry {
                qna_id: qna_id(&href),
                question: text::normalize(&dom::text_content(candidate)),
                answer_endpoint: href,
            })
        })
        .collect();
    non_empty_vec(questions)
}
