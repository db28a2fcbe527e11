//! Compiled regex patterns and selectors for the extractors.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are grouped by the extractor that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches `<br>`, `<br/>` and `<br />` in any case.
pub static LINE_BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("LINE_BREAK_TAG regex"));

/// Enumeration markers that switch the normalizer into multi-line mode.
/// Matched against the lowercased text.
pub const ENUMERATION_MARKERS: &[&str] =
    &["i)", "ii)", "iii)", "iv)", "v)", "a)", "b)", "c)", "d)", "e)"];

// =============================================================================
// Navigation Patterns
// =============================================================================

/// Anchor classes used by book tiles on class listing pages.
pub const BOOK_TILE_CLASSES: &[&str] = &["flex", "p-2", "gap-2", "h-full", "link"];

/// Matches a chapter heading such as `Chapter 3:`.
pub static CHAPTER_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)chapter\s*\d+:").expect("CHAPTER_HEADING regex"));

/// Link text keywords that mark a chapter sub-section in heading-scan mode.
pub const SECTION_KEYWORDS: &[&str] = &[
    "questions",
    "working",
    "talking",
    "understanding",
    "reading",
    "thinking",
    "writing",
    "exercise",
];

/// Matches a question detail path and captures its identifier.
pub static QNA_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/qna/(\d+)").expect("QNA_PATH regex"));

/// Matches text that reads like a question.
pub static INTERROGATIVE_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?|What|How|Why|When|Where").expect("INTERROGATIVE_CUE regex"));

// =============================================================================
// Answer Patterns
// =============================================================================

/// Matches class names of solution containers.
pub static SOLUTION_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"solution|answer").expect("SOLUTION_CLASS regex"));

/// Phrases that mark a solution container as navigation or promotion.
pub const PROMOTIONAL_PHRASES: &[&str] = &[
    "Download",
    "Login",
    "App",
    "Video Solution",
    "Text Solution",
    "Verified by Experts",
    "Show More",
];

/// Matches a "View Solution" / "Click here" marker and everything after it.
pub static QUESTION_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\s*(?:View Solution|Click here).*$").expect("QUESTION_TAIL regex")
});

/// Matches a trailing whitespace-separated number token.
pub static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d+\s*$").expect("TRAILING_NUMBER regex"));

/// Matches a leading solution label.
pub static ANSWER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Text Solution|Solution|Answer|Verified by Experts)\b[:.\s]*")
        .expect("ANSWER_LABEL regex")
});

/// Matches promotional boilerplate and everything after it.
pub static ANSWER_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\s*(?:Show More|ShareSave|Video Solution|More from this Exercise).*$")
        .expect("ANSWER_TAIL regex")
});

// =============================================================================
// Video Patterns
// =============================================================================

/// Providers whose iframes are treated as video embeds.
pub const VIDEO_PROVIDERS: &[&str] = &["youtube", "vimeo", "jwplayer", "cloudfront"];

/// Extensions that mark a URL as a video file.
pub const VIDEO_EXTENSIONS: &[&str] =
    &[".mp4", ".webm", ".ogg", ".avi", ".mov", ".wmv", ".flv", ".m3u8"];

/// Hosts that serve video.
pub const VIDEO_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "jwplatform.com",
    "cloudfront.net",
];

/// JSON keys that may hold a video URL (compared lowercased).
pub const VIDEO_JSON_KEYS: &[&str] = &["video", "videourl", "video_url", "src", "file", "url"];

/// YouTube URL shapes, tried in order; group 1 is the video id.
pub static YOUTUBE_ID: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"youtube\.com/embed/([^/?&#]+)").expect("YOUTUBE_ID embed regex"),
        Regex::new(r"youtube\.com/watch\?v=([^&#]+)").expect("YOUTUBE_ID watch regex"),
        Regex::new(r"youtu\.be/([^/?&#]+)").expect("YOUTUBE_ID short regex"),
    ]
});

/// Common video URL idioms in inline scripts, tried in order.
/// Group 1 is the candidate when present, otherwise the whole match.
pub static SCRIPT_VIDEO_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?i)"videoUrl":\s*"([^"]+)""#,
        r#"(?i)"video_url":\s*"([^"]+)""#,
        r#"(?i)"src":\s*"([^"]+\.(?:mp4|webm|ogg|m3u8))""#,
        r#"(?i)"file":\s*"([^"]+\.(?:mp4|webm|ogg|m3u8))""#,
        r#"(?i)videoSrc:\s*["']([^"']+)["']"#,
        r#"(?i)video:\s*["']([^"']+)["']"#,
        r#"(?i)https?://[^"\s]+\.(?:mp4|webm|ogg|m3u8)"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("SCRIPT_VIDEO_PATTERNS regex"))
    .collect()
});

/// Flat JSON-looking objects that mention a video-ish key.
pub static LOOSE_JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{[^{}]*"(?:video|src|file)[^{}]*\}"#).expect("LOOSE_JSON_OBJECT regex")
});

/// Marker where the structured page payload begins.
pub const STRUCTURED_PAYLOAD_ROOT: &str = r#"{"props""#;

// =============================================================================
// CSS Selectors
// =============================================================================

/// Heading that holds the OCR'd question text.
pub const OCR_HEADING_SELECTOR: &str = "h1#ocr-text";

/// Container of the text solution.
pub const SOLUTION_TEXT_SELECTOR: &str = "div#solution-text";
