//! # doubtnut-scraper
//!
//! Best-effort extraction of book catalogs, chapter hierarchies, question
//! lists, question/answer text and lecture video locations from doubtnut.com
//! pages.
//!
//! The site's markup differs between page types and drifts over time, so
//! every content type is extracted by an ordered chain of independent
//! strategies. Missing content never fails a call: listings come back empty
//! and answers fall back to placeholders. Only transport problems and
//! rejected inputs are errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doubtnut_scraper::{catalog, Client, Options};
//!
//! let client = Client::new(Options::default())?;
//!
//! let books = catalog::unique_books(client.list_books(11)?);
//! for book in &books {
//!     println!("{} -> {}", book.name, book.endpoint);
//! }
//!
//! let answer = client.get_answer("642564128")?;
//! println!("{}: {}", answer.question, answer.answer);
//! # Ok::<(), doubtnut_scraper::Error>(())
//! ```
//!
//! ## Offline extraction
//!
//! The extractors are plain functions over a parsed document:
//!
//! ```rust
//! use doubtnut_scraper::{dom, extractor};
//!
//! let doc = dom::parse(r#"<a href="/qna/7">Define work.</a>"#);
//! let questions = extractor::extract_questions(&doc);
//! assert_eq!(questions[0].qna_id.as_deref(), Some("7"));
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector rules for the scan-style strategies.
pub mod selector;

/// Strategy chains and the per-content-type extractors.
pub mod extractor;

/// Rate-limited, retried page fetching.
pub mod fetch;

/// Text normalization.
pub mod text;

/// URL resolution and host checks.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Network-facing client.
pub mod client;

/// Consumer-side shaping of results.
pub mod catalog;

/// Log setup for binaries.
pub mod logging;

// Public API - re-exports
pub use client::Client;
pub use error::{Error, FetchError, Result};
pub use fetch::{AssetProbe, Fetcher};
pub use options::{Options, RetryPolicy, DEFAULT_USER_AGENT};
pub use result::{
    AnswerRecord, AnswerStatus, AnswerView, BookEntry, ChapterEntry, QuestionEntry,
    QuestionSummary, SubSection, VideoInfo, VideoKind, ANSWER_PLACEHOLDER, QUESTION_PLACEHOLDER,
};
