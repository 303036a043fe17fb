use thiserror::Error;

use crate::Paper;

/// Raised when a screen is entered without the payload it needs.
///
/// Cross-screen state is passed explicitly at screen construction; there
/// is no ambient navigation store to fall back on, so a missing payload
/// is a reportable error rather than a silent empty screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("screen '{screen}' entered without required payload: {missing}")]
pub struct MissingContextError {
    pub screen: &'static str,
    pub missing: &'static str,
}

impl MissingContextError {
    pub fn new(screen: &'static str, missing: &'static str) -> Self {
        Self { screen, missing }
    }
}

/// Hand-off payload from the researcher form to the paper-selection
/// screen. Ephemeral: it lives only as long as the screens that use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearcherContext {
    pub author_name: String,
    pub subject_area: String,
}

/// Hand-off payload into the feed screen: the scored papers plus the
/// keyword set the service extracted from the user's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedContext {
    pub researcher: ResearcherContext,
    pub papers: Vec<Paper>,
    pub keywords: Vec<String>,
}
