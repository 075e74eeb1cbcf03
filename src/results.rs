use serde::{Deserialize, Serialize};

/// Title used when a page has no top-level heading
pub const NO_TITLE: &str = "No Title";

/// One extracted FAQ article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// URL of the page
    pub url: String,

    /// First `h1` text, or [`NO_TITLE`]
    pub title: String,

    /// Newline-joined body text, empty when no container matched
    pub content: String,

    /// Local time of extraction, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl ArticleRecord {
    pub fn new(url: String, title: String, content: String, timestamp: String) -> Self {
        Self {
            url,
            title,
            content,
            timestamp,
        }
    }
}

/// Result of a step that absorbs its own failures.
///
/// `Success` with an empty value and `Failed` are distinct: a listing page
/// with no FAQ links is `Success(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The success value, if any
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }
}

/// What a pipeline run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Links found on the listing page (zero when discovery failed)
    pub discovered: usize,
    /// Links handed to the extractor after the batch cap
    pub attempted: usize,
    /// Records written to the output file
    pub saved: usize,
    pub output_path: String,
}
