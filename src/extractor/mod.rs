//! Content extractors.
//!
//! Each content type is extracted by an ordered list of [`Strategy`] values.
//! The first strategy that returns `Some` wins; a miss falls through to the
//! next one. Extractors are pure functions over a parsed document, so they
//! can run without a network.
//!
//! # Module Structure
//!
//! - `books`: book tiles on a class listing page
//! - `chapters`: chapter hierarchy of a book page
//! - `questions`: question links on a section page
//! - `answers`: question and answer text of a detail page
//! - `video`: lecture video location of a detail page

use dom_query::Document;
use tracing::{debug, trace};

pub mod answers;
pub mod books;
pub mod chapters;
pub mod questions;
pub mod video;

pub use answers::extract_answer;
pub use books::extract_books;
pub use chapters::extract_chapters;
pub use questions::extract_questions;
pub use video::{extract_video, VideoContext};

/// A named extraction strategy.
pub struct Strategy<C: ?Sized, T> {
    /// Name reported in logs when the strategy wins.
    pub name: &'static str,
    pub run: fn(&Document, &C) -> Option<T>,
}

// Manual impls: derives would put bounds on `C` and `T`.
impl<C: ?Sized, T> Clone for Strategy<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, T> Copy for Strategy<C, T> {}

impl<C: ?Sized, T> std::fmt::Debug for Strategy<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// Run `chain` in order and return the first hit.
pub fn run_chain<C: ?Sized, T>(
    chain: &[Strategy<C, T>],
    doc: &Document,
    ctx: &C,
) -> Option<T> {
    chain.iter().find_map(|strategy| {
        let hit = (strategy.run)(doc, ctx);
        if hit.is_some() {
            debug!(strategy = strategy.name, "strategy matched");
        } else {
            trace!(strategy = strategy.name, "strategy missed");
        }
        hit
    })
}

/// Wrap a list so an empty one counts as a strategy miss.
#[must_use]
pub(crate) fn non_empty_vec<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
