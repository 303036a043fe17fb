use tokio::sync::mpsc;

use curate_core::{FetchState, Paper, ResearcherContext};

use super::{App, InputMode, Screen};
use crate::action::Action;
use crate::theme::Theme;
use crate::tui_event::{BackendCommand, BackendEvent};

fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(Theme::hacker());
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn ctx() -> ResearcherContext {
    ResearcherContext {
        author_name: "Ada Lovelace".into(),
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

/// Drive the app to the papers screen with `papers` loaded.
fn app_on_papers_screen(papers: Vec<Paper>) -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (mut app, rx) = test_app();
    app.handle_backend_event(BackendEvent::AuthorPapersLoaded { ctx: ctx(), papers });
    assert_eq!(app.screen, Screen::Papers);
    (app, rx)
}

#[test]
fn landing_confirm_opens_form_in_text_input_mode() {
    let (mut app, _rx) = test_app();
    assert_eq!(app.screen, Screen::Landing);

    app.update(Action::Confirm);
    assert_eq!(app.screen, Screen::Form);
    assert_eq!(app.input_mode, InputMode::TextInput);
}

#[test]
fn invalid_subject_area_never_reaches_the_backend() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Form;
    app.form.full_name = "Ada Lovelace".into();
    app.form.subject_area = "xx.ZZ".into();

    app.update(Action::Confirm);

    assert!(rx.try_recv().is_err());
    assert!(app.form.submission.is_idle());
    assert!(app.form.validation_error.is_some());
    assert_eq!(app.screen, Screen::Form);
}

#[test]
fn valid_submit_sends_command_and_blocks_resubmission() {
    let (mut app, mut rx) = test_app();
    app.screen = Screen::Form;
    app.form.full_name = "Ada Lovelace".into();
    app.form.subject_area = "cs.AI".into();

    app.update(Action::Confirm);
    assert!(app.form.submission.is_loading());
    assert!(matches!(
        rx.try_recv(),
        Ok(BackendCommand::SubmitResearcher { .. })
    ));

    // A second Enter while loading must not issue another command
    app.update(Action::Confirm);
    assert!(rx.try_recv().is_err());
}

#[test]
fn author_papers_loaded_moves_to_papers_screen() {
    let (app, _rx) = app_on_papers_screen(vec![paper("a"), paper("b")]);
    assert!(app.form.submission.is_idle());
    assert_eq!(app.papers.as_ref().unwrap().papers().len(), 2);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn author_papers_failure_shows_error_on_papers_screen() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Form;
    app.handle_backend_event(BackendEvent::AuthorPapersFailed {
        ctx: ctx(),
        error: "connection refused".into(),
    });

    assert_eq!(app.screen, Screen::Papers);
    let papers = app.papers.as_ref().unwrap();
    assert_eq!(papers.fetch.error(), Some("connection refused"));
}

#[test]
fn submit_failure_keeps_the_form_up_with_an_error() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Form;
    app.form.submission = FetchState::Loading;

    app.handle_backend_event(BackendEvent::SubmitFailed {
        error: "HTTP 500".into(),
    });
    assert_eq!(app.screen, Screen::Form);
    assert_eq!(app.form.submission.error(), Some("HTTP 500"));
}

#[test]
fn select_all_toggle_round_trips() {
    let (mut app, _rx) = app_on_papers_screen(vec![paper("a"), paper("b"), paper("c")]);

    app.update(Action::ToggleSelectAll);
    assert!(app.papers.as_ref().unwrap().all_selected());

    app.update(Action::ToggleSelectAll);
    assert!(app.papers.as_ref().unwrap().selection.is_empty());
}

#[test]
fn feed_request_carries_current_selection() {
    let (mut app, mut rx) = app_on_papers_screen(vec![paper("a"), paper("b")]);

    app.update(Action::ToggleSelect); // cursor on "a"
    app.update(Action::Confirm);

    match rx.try_recv() {
        Ok(BackendCommand::FetchSimilarPapers { selected_ids, .. }) => {
            assert_eq!(selected_ids, vec!["a".to_string()]);
        }
        other => panic!("expected FetchSimilarPapers, got {other:?}"),
    }
    assert!(app.papers.as_ref().unwrap().feed_request.is_loading());

    // Selection is frozen while the request is in flight
    app.update(Action::ToggleSelect);
    assert_eq!(app.papers.as_ref().unwrap().selection.len(), 1);

    // And no second request can start
    app.update(Action::Confirm);
    assert!(rx.try_recv().is_err());
}

#[test]
fn similar_papers_loaded_opens_ranked_feed() {
    let (mut app, _rx) = app_on_papers_screen(vec![paper("a")]);
    app.papers.as_mut().unwrap().feed_request = FetchState::Loading;

    let mut low = paper("low");
    low.combined_score = Some(0.2);
    let mut high = paper("high");
    high.combined_score = Some(0.9);

    app.handle_backend_event(BackendEvent::SimilarPapersLoaded {
        ctx: ctx(),
        papers: vec![low, high],
        keywords: vec!["deep".into()],
    });

    assert_eq!(app.screen, Screen::Feed);
    let feed = app.feed.as_ref().unwrap();
    assert_eq!(feed.ranked()[0].id, "high");
    assert!(app.papers.as_ref().unwrap().feed_request.is_idle());
}

#[test]
fn similar_papers_failure_stays_on_papers_screen() {
    let (mut app, _rx) = app_on_papers_screen(vec![paper("a")]);
    app.papers.as_mut().unwrap().feed_request = FetchState::Loading;

    app.handle_backend_event(BackendEvent::SimilarPapersFailed {
        error: "timeout".into(),
    });

    assert_eq!(app.screen, Screen::Papers);
    assert_eq!(
        app.papers.as_ref().unwrap().feed_request.error(),
        Some("timeout")
    );
}

#[test]
fn stale_feed_result_is_dropped_after_navigating_away() {
    let (mut app, _rx) = app_on_papers_screen(vec![paper("a")]);
    app.update(Action::NavigateBack); // back to the form, papers cleared

    app.handle_backend_event(BackendEvent::SimilarPapersLoaded {
        ctx: ctx(),
        papers: vec![paper("x")],
        keywords: Vec::new(),
    });
    assert!(app.feed.is_none());
    assert_eq!(app.screen, Screen::Form);
}

#[test]
fn papers_screen_without_payload_reports_missing_context() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Papers;

    let err = app.missing_context().expect("missing context");
    assert!(err.to_string().contains("papers"));

    // Only the way back works
    app.update(Action::ToggleSelectAll);
    assert_eq!(app.screen, Screen::Papers);
    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::Form);
}

#[test]
fn feed_navigate_back_resets_feed_request() {
    let (mut app, _rx) = app_on_papers_screen(vec![paper("a")]);
    app.papers.as_mut().unwrap().feed_request = FetchState::Loading;
    app.handle_backend_event(BackendEvent::SimilarPapersLoaded {
        ctx: ctx(),
        papers: vec![paper("x")],
        keywords: Vec::new(),
    });
    assert_eq!(app.screen, Screen::Feed);

    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::Papers);
    assert!(app.feed.is_none());
    assert!(app.papers.as_ref().unwrap().feed_request.is_idle());
}

#[test]
fn legend_closes_before_the_feed_navigates() {
    let (mut app, _rx) = test_app();
    app.screen = Screen::Feed;
    app.feed = Some(crate::model::feed::FeedState::new(curate_core::FeedContext {
        researcher: ctx(),
        papers: vec![paper("a")],
        keywords: Vec::new(),
    }));

    app.update(Action::ToggleLegend);
    assert!(app.feed.as_ref().unwrap().show_legend);

    app.update(Action::NavigateBack);
    assert!(!app.feed.as_ref().unwrap().show_legend);
    assert_eq!(app.screen, Screen::Feed);
}

#[test]
fn quit_asks_for_confirmation_first() {
    let (mut app, _rx) = test_app();

    assert!(!app.update(Action::Quit));
    assert!(app.confirm_quit);

    assert!(!app.update(Action::NavigateBack));
    assert!(!app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Confirm));
    assert!(app.should_quit);
}
