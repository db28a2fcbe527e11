//! Question and answer text of a question detail page.
//!
//! Both texts come from their own priority chain. Whatever the chains find
//! is cleaned of page boilerplate; a text that ends up empty is replaced by
//! its placeholder so the record is always complete.

use dom_query::{Document, Selection};

use super::{run_chain, Strategy};
use crate::dom;
use crate::patterns::{
    ANSWER_LABEL, ANSWER_TAIL, OCR_HEADING_SELECTOR, PROMOTIONAL_PHRASES, QUESTION_TAIL,
    SOLUTION_TEXT_SELECTOR, TRAILING_NUMBER,
};
use crate::result::{AnswerRecord, AnswerStatus, ANSWER_PLACEHOLDER, QUESTION_PLACEHOLDER};
use crate::selector::{query_all, rules};
use crate::text;

/// Accepted length range (in chars) of a generic solution container.
const SOLUTION_CHARS: std::ops::RangeInclusive<usize> = 30..=1000;

const QUESTION_CHAIN: &[Strategy<(), String>] = &[
    Strategy {
        name: "ocr_heading",
        run: ocr_heading,
    },
    Strategy {
        name: "og_title",
        run: og_title,
    },
    Strategy {
        name: "title",
        run: title,
    },
];

const ANSWER_CHAIN: &[Strategy<(), String>] = &[
    Strategy {
        name: "meta_description",
        run: meta_description,
    },
    Strategy {
        name: "og_description",
        run: og_description,
    },
    Strategy {
        name: "solution_text",
        run: solution_text,
    },
    Strategy {
        name: "solution_container",
        run: solution_container,
    },
];

/// Extract the question and answer of a detail page.
///
/// Never fails: missing texts become placeholders and the status turns
/// [`AnswerStatus::Partial`] when the answer is the placeholder.
#[must_use]
pub fn extract_answer(doc: &Document, qna_id: &str, source_url: &str) -> AnswerRecord {
    let question = run_chain(QUESTION_CHAIN, doc, &())
        .map(|q| clean_question(&q))
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| QUESTION_PLACEHOLDER.to_string());

    let answer = run_chain(ANSWER_CHAIN, doc, &())
        .map(|a| clean_answer(&a))
        .filter(|a| !a.is_empty());

    let status = if answer.is_some() {
        AnswerStatus::Success
    } else {
        AnswerStatus::Partial
    };

    AnswerRecord {
        qna_id: qna_id.to_string(),
        question,
        answer: answer.unwrap_or_else(|| ANSWER_PLACEHOLDER.to_string()),
        source_url: source_url.to_string(),
        status,
    }
}

/// Strip the call-to-action tail and a trailing counter from question text.
#[must_use]
pub fn clean_question(question: &str) -> String {
    let question = QUESTION_TAIL.replace(question, "");
    TRAILING_NUMBER.replace(question.trim(), "").trim().to_string()
}

/// Strip the leading label and promotional tail from answer text.
#[must_use]
pub fn clean_answer(answer: &str) -> String {
    let answer = ANSWER_LABEL.replace(answer.trim(), "");
    ANSWER_TAIL.replace(&answer, "").trim().to_string()
}

// The OCR heading wraps rendered math in `span.math > span`.
fn math_text(container: &Selection) -> Option<String> {
    let math = dom::query_selector(container, "span.math")?;
    let inner = dom::query_selector(&math, "span").unwrap_or(math);
    Some(text::normalize(&dom::text_content(&inner)))
}

// === Question strategies ===

fn ocr_heading(doc: &Document, _: &()) -> Option<String> {
    let heading = dom::query_document(doc, OCR_HEADING_SELECTOR)?;
    let question = math_text(&heading).unwrap_or_else(|| text::normalize(&dom::text_content(&heading)));
    (!question.is_empty()).then_some(question)
}

fn og_title(doc: &Document, _: &()) -> Option<String> {
    dom::meta_content(doc, "property", "og:title").and_then(|t| text::non_empty(&t))
}

fn title(doc: &Document, _: &()) -> Option<String> {
    dom::query_document(doc, "title").and_then(|t| text::non_empty(&dom::text_content(&t)))
}

// === Answer strategies ===

fn meta_description(doc: &Document, _: &()) -> Option<String> {
    dom::meta_content(doc, "name", "description").and_then(|d| text::non_empty(&d))
}

fn og_description(doc: &Document, _: &()) -> Option<String> {
    dom::meta_content(doc, "property", "og:description").and_then(|d| text::non_empty(&d))
}

fn solution_text(doc: &Document, _: &()) -> Option<String> {
    let container = dom::query_document(doc, SOLUTION_TEXT_SELECTOR)?;

    math_text(&container)
        .filter(|a| !a.is_empty())
        .or_else(|| text::non_empty(&dom::text_content(&container)))
}

fn solution_container(doc: &Document, _: &()) -> Option<String> {
    query_all(&doc.select("html"), rules::solution_container)
        .iter()
        .map(|container| text::normalize(&dom::text_content(container)))
        .filter(|text| !PROMOTIONAL_PHRASES.iter().any(|phrase| text.contains(phrase)))
        .find(|text| SOLUTION_CHARS.contains(&text.chars().count()))
}
