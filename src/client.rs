//! Network-facing entry points.
//!
//! Each operation resolves its page URL against the configured site root,
//! fetches it under the matching retry policy, parses it and hands the
//! document to the extractor for that content type.

use dom_query::Document;
use tracing::info;
use url::Url;

use crate::error::{Error, Result};
use crate::extractor::{self, VideoContext};
use crate::fetch::Fetcher;
use crate::options::{Options, RetryPolicy};
use crate::result::{AnswerRecord, BookEntry, ChapterEntry, QuestionEntry, VideoInfo};
use crate::url_utils::{belongs_to, resolve};

/// Scraping client.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Client {
    options: Options,
    base: Url,
    fetcher: Fetcher,
}

impl Client {
    /// Create a client from options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when `base_url` does not parse and
    /// [`Error::Client`] when the HTTP client cannot be built.
    pub fn new(options: Options) -> Result<Self> {
        let base = Url::parse(&options.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", options.base_url)))?;
        let fetcher = Fetcher::new(&options)?;

        Ok(Self {
            options,
            base,
            fetcher,
        })
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Absolute URL of a site path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        resolve(&self.base, path)
    }

    /// Listing page of the books of a class.
    #[must_use]
    pub fn books_url(&self, class_number: u8) -> String {
        self.url_for(&format!(
            "/books/class-{class_number}-all-books-download-questions-answers-solutions"
        ))
    }

    /// Detail page of a question.
    #[must_use]
    pub fn answer_url(&self, qna_id: &str) -> String {
        self.url_for(&format!("/qna/{qna_id}"))
    }

    /// Books listed for `class_number`, in page order and with duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the listing page cannot be fetched.
    pub fn list_books(&self, class_number: u8) -> Result<Vec<BookEntry>> {
        let doc = self.document(&self.books_url(class_number), &self.options.retry)?;
        let books = extractor::extract_books(&doc, class_number, &self.base);
        info!(class_number, count = books.len(), "extracted books");
        Ok(books)
    }

    /// Chapters of the book at `book_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the book page cannot be fetched.
    pub fn list_chapters(&self, book_path: &str) -> Result<Vec<ChapterEntry>> {
        let doc = self.document(&self.url_for(book_path), &self.options.retry)?;
        let chapters = extractor::extract_chapters(&doc, &self.base);
        info!(book_path, count = chapters.len(), "extracted chapters");
        Ok(chapters)
    }

    /// Questions of the section at `section_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the section page cannot be fetched.
    pub fn list_questions(&self, section_path: &str) -> Result<Vec<QuestionEntry>> {
        let doc = self.document(&self.url_for(section_path), &self.options.retry)?;
        let questions = extractor::extract_questions(&doc);
        info!(section_path, count = questions.len(), "extracted questions");
        Ok(questions)
    }

    /// Question and answer text of question `qna_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the detail page cannot be fetched.
    /// Missing content is never an error.
    pub fn get_answer(&self, qna_id: &str) -> Result<AnswerRecord> {
        let url = self.answer_url(qna_id);
        let doc = self.document(&url, &self.options.retry)?;
        let record = extractor::extract_answer(&doc, qna_id, &url);
        info!(qna_id, status = ?record.status, "extracted answer");
        Ok(record)
    }

    /// Locate the lecture video of a page on the configured site.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidUrl`] when `url` is malformed or foreign; no request is made.
    /// * [`Error::Fetch`] when the page cannot be fetched.
    /// * [`Error::NoVideoContent`] when every strategy misses.
    pub fn extract_video_url(&self, url: &str) -> Result<VideoInfo> {
        let page_url = self.check_video_url(url)?;
        let doc = self.document(page_url.as_str(), &self.options.video_retry)?;

        let ctx = VideoContext {
            page_url: &page_url,
            video_cdn: &self.options.video_cdn,
            probe: &self.fetcher,
        };
        let video = extractor::extract_video(&doc, &ctx).ok_or(Error::NoVideoContent)?;
        info!(url, kind = ?video.kind, "located video");
        Ok(video)
    }

    fn check_video_url(&self, url: &str) -> Result<Url> {
        let parsed = Url::parse(url.trim()).map_err(|_| Error::InvalidUrl(url.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https")
            || !belongs_to(parsed.as_str(), &self.options.origin_domain)
        {
            return Err(Error::InvalidUrl(url.to_string()));
        }
        Ok(parsed)
    }

    fn document(&self, url: &str, policy: &RetryPolicy) -> Result<Document> {
        let html = self.fetcher.fetch(url, policy)?;
        Ok(Document::from(html.as_str()))
    }
}
