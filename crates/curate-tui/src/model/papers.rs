use curate_core::{FetchState, Paper, ResearcherContext, SelectionState};

/// State of the paper-selection screen. Constructed only with its
/// required payload (the researcher context), never from ambient state.
#[derive(Debug, Clone)]
pub struct PapersState {
    pub ctx: ResearcherContext,
    /// The author's own papers, as fetched.
    pub fetch: FetchState<Vec<Paper>>,
    /// Checkbox state; always a subset of the loaded papers' ids.
    pub selection: SelectionState,
    /// Flight state of the curated-feed request.
    pub feed_request: FetchState<()>,
    pub cursor: usize,
}

impl PapersState {
    pub fn loading(ctx: ResearcherContext) -> Self {
        Self {
            ctx,
            fetch: FetchState::Loading,
            selection: SelectionState::new(),
            feed_request: FetchState::Idle,
            cursor: 0,
        }
    }

    pub fn papers(&self) -> &[Paper] {
        self.fetch.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn paper_ids(&self) -> Vec<String> {
        self.papers().iter().map(|p| p.id.clone()).collect()
    }

    /// Install a fresh paper list, dropping any selected ids that no
    /// longer exist (selection must stay a subset of displayed papers).
    pub fn set_papers(&mut self, papers: Vec<Paper>) {
        self.fetch.resolve(papers);
        let known = self.paper_ids();
        self.selection.retain_known(&known);
        self.cursor = self.cursor.min(known.len().saturating_sub(1));
    }

    pub fn paper_under_cursor(&self) -> Option<&Paper> {
        self.papers().get(self.cursor)
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.papers().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Whether selection mutations are allowed right now. Blocked while
    /// the feed request is in flight so a resolving submission never
    /// races a changing selection.
    pub fn can_mutate_selection(&self) -> bool {
        !self.feed_request.is_loading() && self.fetch.loaded().is_some()
    }

    pub fn toggle_under_cursor(&mut self) {
        if !self.can_mutate_selection() {
            return;
        }
        if let Some(id) = self.paper_under_cursor().map(|p| p.id.clone()) {
            self.selection.toggle(&id);
        }
    }

    pub fn toggle_all(&mut self) {
        if !self.can_mutate_selection() {
            return;
        }
        let known = self.paper_ids();
        self.selection.toggle_all(&known);
    }

    /// True when every known id is currently selected (drives the
    /// "Select All" / "Deselect All" label).
    pub fn all_selected(&self) -> bool {
        let known = self.paper_ids();
        !known.is_empty() && known.iter().all(|id| self.selection.is_selected(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ResearcherContext {
        ResearcherContext {
            author_name: "Ada".into(),
            subject_area: "cs.AI".into(),
        }
    }

    fn paper(id: &str) -> Paper {
        Paper {
            id: id.to_string(),
            title: format!("Paper {id}"),
            summary: String::new(),
            authors: Vec::new(),
            published: String::new(),
            pdf_url: String::new(),
            embedding_score: None,
            keyword_score: None,
            tfidf_score: None,
            bm25_score: None,
            combined_score: None,
        }
    }

    #[test]
    fn set_papers_drops_stale_selection() {
        let mut state = PapersState::loading(ctx());
        state.set_papers(vec![paper("a"), paper("b")]);
        state.selection.toggle("a");
        state.selection.toggle("b");

        state.fetch = FetchState::Loading;
        state.set_papers(vec![paper("b"), paper("c")]);

        assert_eq!(state.selection.ids(), &["b".to_string()]);
    }

    #[test]
    fn toggle_blocked_while_feed_request_in_flight() {
        let mut state = PapersState::loading(ctx());
        state.set_papers(vec![paper("a")]);
        state.feed_request = FetchState::Loading;

        state.toggle_under_cursor();
        state.toggle_all();

        assert!(state.selection.is_empty());
    }

    #[test]
    fn cursor_clamps_to_paper_count() {
        let mut state = PapersState::loading(ctx());
        state.set_papers(vec![paper("a"), paper("b")]);
        state.move_cursor_down();
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor, 1);
        state.move_cursor_up();
        state.move_cursor_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn all_selected_tracks_full_selection() {
        let mut state = PapersState::loading(ctx());
        state.set_papers(vec![paper("a"), paper("b")]);
        assert!(!state.all_selected());
        state.toggle_all();
        assert!(state.all_selected());
        state.toggle_all();
        assert!(!state.all_selected());
    }
}
