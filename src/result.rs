//! Record types produced by the extractors.
//!
//! Every record is a plain value: produced fresh per call, serializable, and
//! owned entirely by the caller once returned.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder used when no strategy could recover the question text.
pub const QUESTION_PLACEHOLDER: &str = "Question text could not be extracted from this page.";

/// Placeholder used when no strategy could recover the answer text.
pub const ANSWER_PLACEHOLDER: &str = "Answer could not be extracted from this page.";

/// A book tile on a class listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Display name (image alt text or anchor text).
    pub name: String,

    /// Relative path of the book page. Unique per book.
    pub endpoint: String,

    /// Absolute cover image URL, when the tile has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A linked section inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    pub name: String,

    /// Relative path, never carrying a `#` fragment.
    pub endpoint: String,
}

/// A chapter with at least one sub-section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub chapter_name: String,

    /// Never empty: chapters without sub-sections are dropped by the extractor.
    pub sub_sections: Vec<SubSection>,

    /// Absolute URL of the chapter PDF.
    pub pdf_link: Option<String>,
}

/// A question link on a chapter section page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    /// Numeric identifier taken from the `/qna/<id>` path.
    pub qna_id: Option<String>,

    pub question: String,

    /// Relative path of the question detail page.
    pub answer_endpoint: String,
}

/// Whether the answer text was recovered or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    Success,
    Partial,
}

/// Question and answer text of a single detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub qna_id: String,

    /// Cleaned question text, or [`QUESTION_PLACEHOLDER`].
    pub question: String,

    /// Cleaned answer text, or [`ANSWER_PLACEHOLDER`].
    pub answer: String,

    pub source_url: String,

    /// `Partial` exactly when `answer` is the placeholder.
    pub status: AnswerStatus,
}

/// Which strategy produced a [`VideoInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoKind {
    DirectVideo,
    Youtube,
    IframeEmbed,
    DoubtnutVideo,
    ScriptExtracted,
    JsonExtracted,
    MetaTag,
}

/// Location of a lecture video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Absolute video URL or embed URL.
    pub url: String,

    #[serde(rename = "type")]
    pub kind: VideoKind,

    /// MIME-like format tag, `embedded`, `youtube`, `vimeo` or `unknown`.
    pub format: String,

    /// YouTube video identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,

    // Raw values from the structured video payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_id: Option<Value>,
}

impl VideoInfo {
    /// A result carrying only url, kind and format.
    #[must_use]
    pub fn new(url: impl Into<String>, kind: VideoKind, format: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind,
            format: format.into(),
            video_id: None,
            duration: None,
            question_id: None,
            answer_id: None,
        }
    }
}

/// Question list entry as handed to end users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub qna_id: Option<String>,
    pub question: String,
}

/// Answer text plus the lecture video, when one could be located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerView {
    pub question: String,
    pub answer: String,
    pub video_url: Option<String>,
}
