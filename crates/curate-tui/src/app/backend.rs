use curate_core::{FeedContext, FetchState};

use super::{App, Screen};
use crate::model::feed::FeedState;
use crate::model::papers::PapersState;
use crate::tui_event::BackendEvent;

impl App {
    /// Fold a backend event into app state. All remote failures land
    /// here as screen-local error states; none of them crash or leave
    /// the current screen.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SubmitFailed { error } => {
                self.form.submission.fail(error);
            }
            BackendEvent::AuthorPapersLoaded { ctx, papers } => {
                self.form.submission = FetchState::Idle;
                let mut state = PapersState::loading(ctx);
                state.set_papers(papers);
                self.papers = Some(state);
                self.feed = None;
                self.screen = Screen::Papers;
                self.sync_input_mode();
            }
            BackendEvent::AuthorPapersFailed { ctx, error } => {
                self.form.submission = FetchState::Idle;
                let mut state = PapersState::loading(ctx);
                state.fetch.fail(error);
                self.papers = Some(state);
                self.screen = Screen::Papers;
                self.sync_input_mode();
            }
            BackendEvent::SimilarPapersLoaded {
                ctx,
                papers,
                keywords,
            } => {
                let Some(state) = self.papers.as_mut() else {
                    // User already navigated away; drop the stale result.
                    tracing::debug!("discarding feed result with no papers screen");
                    return;
                };
                state.feed_request = FetchState::Idle;
                self.feed = Some(FeedState::new(FeedContext {
                    researcher: ctx,
                    papers,
                    keywords,
                }));
                self.screen = Screen::Feed;
                self.sync_input_mode();
            }
            BackendEvent::SimilarPapersFailed { error } => {
                if let Some(state) = self.papers.as_mut() {
                    state.feed_request.fail(error);
                }
            }
        }
    }
}
