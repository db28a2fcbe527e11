//! Consumer-side shaping of extraction results.
//!
//! The client returns everything the pages offer; these helpers apply the
//! policies of the public listing: classes 6 to 12 only, one entry per book,
//! compact question summaries, and answers that survive a missing video.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use tracing::warn;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::result::{AnswerRecord, AnswerView, BookEntry, QuestionEntry, QuestionSummary, VideoInfo};

/// Classes the site publishes books for.
pub const CLASS_RANGE: RangeInclusive<u8> = 6..=12;

/// Reject class numbers the site has no listing for.
///
/// # Errors
///
/// Returns [`Error::InvalidClass`] outside [`CLASS_RANGE`].
pub fn validate_class(class_number: u8) -> Result<u8> {
    if CLASS_RANGE.contains(&class_number) {
        Ok(class_number)
    } else {
        Err(Error::InvalidClass(class_number))
    }
}

/// Keep the first entry per `endpoint`, preserving order.
#[must_use]
pub fn unique_books(books: Vec<BookEntry>) -> Vec<BookEntry> {
    let mut seen = HashSet::new();
    books
        .into_iter()
        .filter(|book| seen.insert(book.endpoint.clone()))
        .collect()
}

/// Project questions to `{qna_id, question}`, dropping `View Solution` labels.
#[must_use]
pub fn summarize_questions(questions: &[QuestionEntry]) -> Vec<QuestionSummary> {
    questions
        .iter()
        .map(|q| QuestionSummary {
            qna_id: q.qna_id.clone(),
            question: q.question.replace("View Solution", "").trim().to_string(),
        })
        .collect()
}

/// Combine an answer with the outcome of the video lookup.
///
/// A failed lookup only costs the video URL.
#[must_use]
pub fn fold_answer(record: AnswerRecord, video: Result<VideoInfo>) -> AnswerView {
    let video_url = match video {
        Ok(info) => Some(info.url),
        Err(err) => {
            warn!(qna_id = %record.qna_id, error = %err, "no video for answer");
            None
        }
    };

    AnswerView {
        question: record.question,
        answer: record.answer,
        video_url,
    }
}

/// Fetch the answer of `qna_id` together with its lecture video.
///
/// # Errors
///
/// Returns [`Error::Fetch`] when the answer page itself cannot be fetched.
pub fn answer_with_video(client: &Client, qna_id: &str) -> Result<AnswerView> {
    let record = client.get_answer(qna_id)?;
    let video = client.extract_video_url(&client.answer_url(qna_id));
    Ok(fold_answer(record, video))
}
