use curate_core::{FeedContext, Paper, rank_by_combined_score};

/// State of the curated-feed screen.
///
/// The display order is fixed at construction: non-increasing in
/// `combined_score`, ties in arrival order. Scores are shown as sent by
/// the service; nothing is recomputed here.
#[derive(Debug, Clone)]
pub struct FeedState {
    pub ctx: FeedContext,
    ranked: Vec<Paper>,
    pub cursor: usize,
    pub show_legend: bool,
}

impl FeedState {
    pub fn new(ctx: FeedContext) -> Self {
        let ranked = rank_by_combined_score(&ctx.papers);
        Self {
            ctx,
            ranked,
            cursor: 0,
            show_legend: false,
        }
    }

    pub fn ranked(&self) -> &[Paper] {
        &self.ranked
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.ctx.keywords
    }

    pub fn move_cursor_down(&mut self) {
        if !self.ranked.is_empty() {
            self.cursor = (self.cursor + 1).min(self.ranked.len() - 1);
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn page_down(&mut self, page: usize) {
        if !self.ranked.is_empty() {
            self.cursor = (self.cursor + page.max(1)).min(self.ranked.len() - 1);
        }
    }

    pub fn page_up(&mut self, page: usize) {
        self.cursor = self.cursor.saturating_sub(page.max(1));
    }
}
