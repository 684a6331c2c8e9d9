//! Bounded snapshots of the page a question is asked about.
//!
//! The live page is reached only through [`PageSource`], so capture can
//! run against a browser bridge, a saved document, or a test double.

pub mod direction;

pub use direction::{TextDirection, detect_direction};

use log::debug;

/// Default upper bound on body characters sent as context.
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 10_000;

/// Read access to the current page's ambient state.
pub trait PageSource {
    /// Current document location.
    fn url(&self) -> String;

    /// Current document title.
    fn title(&self) -> String;

    /// Visible text of the document body. Empty when the page has none.
    fn visible_text(&self) -> String;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn url(&self) -> String {
        (**self).url()
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn visible_text(&self) -> String {
        (**self).visible_text()
    }
}

/// A fixed page, for hosts that already hold the document's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl PageSnapshot {
    pub fn new(url: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

impl PageSource for PageSnapshot {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn visible_text(&self) -> String {
        self.text.clone()
    }
}

/// Page state captured for a single query.
///
/// `body_text` holds at most the `max_context_chars` the capture was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    url: String,
    title: String,
    body_text: String,
}

impl PageContext {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }
}

/// Produces [`PageContext`] values from a [`PageSource`].
#[derive(Debug, Clone)]
pub struct ContextExtractor<P> {
    source: P,
}

impl<P: PageSource> ContextExtractor<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// Capture URL, title and up to `max_context_chars` characters of body text.
    ///
    /// Truncation keeps a plain prefix and never splits a character.
    pub fn capture(&self, max_context_chars: usize) -> PageContext {
        let text = self.source.visible_text();
        let original_chars = text.chars().count();
        let body_text = truncate_chars(&text, max_context_chars);

        if original_chars > max_context_chars {
            debug!("Page text truncated from {original_chars} to {max_context_chars} chars");
        }

        PageContext {
            url: self.source.url(),
            title: self.source.title(),
            body_text,
        }
    }
}

/// Prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
