use serde::Deserialize;

pub mod categories;
pub mod config_file;
pub mod context;
pub mod fetch;
pub mod highlight;
pub mod rank;
pub mod score;
pub mod selection;

// Re-export for convenience
pub use categories::{ARXIV_CATEGORIES, is_valid_category};
pub use context::{FeedContext, MissingContextError, ResearcherContext};
pub use fetch::FetchState;
pub use highlight::{Segment, highlight};
pub use rank::rank_by_combined_score;
pub use score::{ScoreComponent, normalized_breakdown};
pub use selection::SelectionState;

/// A paper as returned by the remote curation service.
///
/// The score fields are only present on feed responses
/// (`/api/similar_papers`); author-papers responses carry the
/// bibliographic fields alone. All scores are precomputed server-side —
/// nothing in this workspace recomputes them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub embedding_score: Option<f64>,
    #[serde(default)]
    pub keyword_score: Option<f64>,
    #[serde(default)]
    pub tfidf_score: Option<f64>,
    #[serde(default)]
    pub bm25_score: Option<f64>,
    #[serde(default)]
    pub combined_score: Option<f64>,
}

impl Paper {
    /// Author list for display, joined with ", ".
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }

    /// Publication date trimmed to the date part (service sends ISO strings).
    pub fn published_date(&self) -> &str {
        self.published
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.published)
    }
}
