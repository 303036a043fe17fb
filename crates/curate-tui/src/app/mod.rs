mod backend;
mod update;

use tokio::sync::mpsc;

use curate_core::MissingContextError;

use crate::model::feed::FeedState;
use crate::model::form::FormState;
use crate::model::papers::PapersState;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Form,
    Papers,
    Feed,
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    TextInput,
}

/// Main application state.
///
/// Screens that need a navigation payload (`Papers`, `Feed`) hold it as
/// `Option<...State>`: the state is only ever constructed together with
/// its payload, and entering such a screen with `None` is reported as a
/// [`MissingContextError`] instead of being rendered from ambient state.
pub struct App {
    pub screen: Screen,
    pub theme: Theme,
    pub input_mode: InputMode,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Height of the visible list area (set on resize, used for paging).
    pub visible_rows: usize,

    pub form: FormState,
    pub papers: Option<PapersState>,
    pub feed: Option<FeedState>,

    /// Channel to send commands to the backend task.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Landing,
            theme,
            input_mode: InputMode::Normal,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            visible_rows: 20,
            form: FormState::default(),
            papers: None,
            feed: None,
            backend_cmd_tx: None,
        }
    }

    /// The payload error for the current screen, if it was entered
    /// without the state it requires.
    pub fn missing_context(&self) -> Option<MissingContextError> {
        match self.screen {
            Screen::Papers if self.papers.is_none() => Some(MissingContextError::new(
                "papers",
                "researcher context and author paper list",
            )),
            Screen::Feed if self.feed.is_none() => Some(MissingContextError::new(
                "feed",
                "scored papers and keyword set",
            )),
            _ => None,
        }
    }

    pub(crate) fn send_command(&self, cmd: BackendCommand) {
        if let Some(tx) = &self.backend_cmd_tx {
            if tx.send(cmd).is_err() {
                tracing::error!("backend command channel closed");
            }
        }
    }

    /// Keep the input mode in sync with what the visible screen expects:
    /// free-typing on the form, key commands everywhere else (and in
    /// every overlay).
    pub(crate) fn sync_input_mode(&mut self) {
        let text_entry = self.screen == Screen::Form && !self.confirm_quit && !self.show_help;
        self.input_mode = if text_entry {
            InputMode::TextInput
        } else {
            InputMode::Normal
        };
    }

    /// Render the current screen plus any overlays.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        match self.screen {
            Screen::Landing => crate::view::landing::render_in(f, self, area),
            Screen::Form => crate::view::form::render_in(f, self, area),
            Screen::Papers => crate::view::papers::render_in(f, self, area),
            Screen::Feed => crate::view::feed::render_in(f, self, area),
        }

        if let Some(feed) = &self.feed {
            if self.screen == Screen::Feed && feed.show_legend {
                crate::view::legend::render(f, &self.theme);
            }
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
