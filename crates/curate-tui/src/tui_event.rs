use curate_core::{Paper, ResearcherContext};

/// Commands sent from the TUI to the backend task.
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// Register the researcher with the service, then fetch their papers.
    SubmitResearcher { ctx: ResearcherContext },
    /// Request the curated feed for the selected paper ids.
    FetchSimilarPapers {
        ctx: ResearcherContext,
        selected_ids: Vec<String>,
    },
}

/// Events flowing from the backend task to the TUI.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// Registration failed; the form stays up with an inline error.
    SubmitFailed { error: String },
    /// Registration succeeded and the author's papers arrived.
    AuthorPapersLoaded {
        ctx: ResearcherContext,
        papers: Vec<Paper>,
    },
    /// Registration succeeded but the paper fetch failed.
    AuthorPapersFailed {
        ctx: ResearcherContext,
        error: String,
    },
    /// The curated feed arrived.
    SimilarPapersLoaded {
        ctx: ResearcherContext,
        papers: Vec<Paper>,
        keywords: Vec<String>,
    },
    /// The curated feed request failed.
    SimilarPapersFailed { error: String },
}
