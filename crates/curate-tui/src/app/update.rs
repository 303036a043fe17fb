use curate_core::FetchState;

use super::{App, Screen};
use crate::action::Action;
use crate::tui_event::BackendCommand;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if let Action::Tick = action {
            self.tick = self.tick.wrapping_add(1);
            return false;
        }
        if let Action::Resize(_w, h) = action {
            self.visible_rows = (h as usize).saturating_sub(8);
            return false;
        }

        // Quit confirmation modal — q/Enter confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit | Action::Confirm => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                    self.sync_input_mode();
                }
                _ => {}
            }
            return false;
        }

        // Help overlay swallows everything except its dismissal keys
        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                    self.sync_input_mode();
                }
                Action::Quit => {
                    self.confirm_quit = true;
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
                self.sync_input_mode();
                return false;
            }
            Action::ToggleHelp => {
                self.show_help = true;
                self.sync_input_mode();
                return false;
            }
            _ => {}
        }

        match self.screen {
            Screen::Landing => self.update_landing(action),
            Screen::Form => self.update_form(action),
            Screen::Papers => self.update_papers(action),
            Screen::Feed => self.update_feed(action),
        }
        false
    }

    fn update_landing(&mut self, action: Action) {
        if action == Action::Confirm {
            self.screen = Screen::Form;
            self.sync_input_mode();
        }
    }

    fn update_form(&mut self, action: Action) {
        match action {
            Action::Input(ch) => self.form.input(ch),
            Action::NextField => self.form.focus_next(),
            Action::Confirm => self.submit_form(),
            Action::NavigateBack => {
                self.screen = Screen::Landing;
                self.sync_input_mode();
            }
            _ => {}
        }
    }

    /// Validate and, only on success, issue the registration command.
    /// An invalid subject area never reaches the network.
    fn submit_form(&mut self) {
        if self.form.submission.is_loading() {
            return;
        }
        let Some(ctx) = self.form.validate() else {
            return;
        };
        if !self.form.submission.begin() {
            return;
        }
        self.send_command(BackendCommand::SubmitResearcher { ctx });
    }

    fn update_papers(&mut self, action: Action) {
        if self.missing_context().is_some() {
            // Nothing to operate on; only the way back works.
            if action == Action::NavigateBack {
                self.screen = Screen::Form;
                self.sync_input_mode();
            }
            return;
        }
        match action {
            Action::NavigateBack => {
                self.papers = None;
                self.form.submission = FetchState::Idle;
                self.screen = Screen::Form;
                self.sync_input_mode();
            }
            Action::Confirm => self.submit_feed_request(),
            _ => {
                let Some(papers) = self.papers.as_mut() else {
                    return;
                };
                match action {
                    Action::MoveDown => papers.move_cursor_down(),
                    Action::MoveUp => papers.move_cursor_up(),
                    Action::GoTop => papers.cursor = 0,
                    Action::GoBottom => {
                        papers.cursor = papers.papers().len().saturating_sub(1);
                    }
                    Action::PageDown => {
                        let page = self.visible_rows;
                        let len = papers.papers().len();
                        if len > 0 {
                            papers.cursor = (papers.cursor + page.max(1)).min(len - 1);
                        }
                    }
                    Action::PageUp => {
                        papers.cursor = papers.cursor.saturating_sub(self.visible_rows.max(1));
                    }
                    Action::ToggleSelect => papers.toggle_under_cursor(),
                    Action::ToggleSelectAll => papers.toggle_all(),
                    _ => {}
                }
            }
        }
    }

    /// Single-flight curated-feed request for the current selection.
    fn submit_feed_request(&mut self) {
        let Some(papers) = self.papers.as_mut() else {
            return;
        };
        if papers.fetch.loaded().is_none() {
            return;
        }
        if !papers.feed_request.begin() {
            return;
        }
        let cmd = BackendCommand::FetchSimilarPapers {
            ctx: papers.ctx.clone(),
            selected_ids: papers.selection.ids().to_vec(),
        };
        self.send_command(cmd);
    }

    fn update_feed(&mut self, action: Action) {
        if self.missing_context().is_some() {
            if action == Action::NavigateBack {
                self.screen = Screen::Papers;
                self.sync_input_mode();
            }
            return;
        }
        let Some(feed) = self.feed.as_mut() else {
            return;
        };

        // Legend overlay closes before the screen navigates away
        if feed.show_legend {
            if matches!(action, Action::ToggleLegend | Action::NavigateBack) {
                feed.show_legend = false;
            }
            return;
        }

        match action {
            Action::MoveDown => feed.move_cursor_down(),
            Action::MoveUp => feed.move_cursor_up(),
            Action::GoTop => feed.cursor = 0,
            Action::GoBottom => feed.cursor = feed.ranked().len().saturating_sub(1),
            Action::PageDown => feed.page_down(self.visible_rows),
            Action::PageUp => feed.page_up(self.visible_rows),
            Action::ToggleLegend => feed.show_legend = true,
            Action::NavigateBack => {
                self.feed = None;
                if let Some(papers) = self.papers.as_mut() {
                    papers.feed_request = FetchState::Idle;
                }
                self.screen = Screen::Papers;
                self.sync_input_mode();
            }
            _ => {}
        }
    }
}
