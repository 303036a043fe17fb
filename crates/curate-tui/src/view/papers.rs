use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use curate_core::{FetchState, Paper};

use crate::app::App;
use crate::view::{spinner_char, truncate};

/// Lines each paper row occupies: title, summary, authors, spacer.
const ROW_HEIGHT: usize = 4;

/// Render the paper-selection screen.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(err) = app.missing_context() {
        render_centered_message(f, area, &format!("\u{2717} {err}"), theme.error);
        return;
    }
    let Some(state) = app.papers.as_ref() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(5),    // list / status
        Constraint::Length(1), // footer
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" CURATE ", theme.header_style()),
        Span::styled(
            " Select Papers for Curated Feed",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} \u{00b7} {}",
                state.ctx.author_name, state.ctx.subject_area
            ),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    match &state.fetch {
        FetchState::Idle | FetchState::Loading => {
            let msg = format!("{} Loading your papers...", spinner_char(app.tick));
            render_centered_message(f, chunks[1], &msg, theme.active);
        }
        FetchState::Error(e) => {
            let msg = format!(
                "\u{2717} Could not load papers: {e}\n\nNo papers to show. Esc to go back."
            );
            render_centered_message(f, chunks[1], &msg, theme.error);
        }
        FetchState::Loaded(papers) if papers.is_empty() => {
            let msg = format!(
                "No papers found for '{}'.\n\nEsc to go back and try another name.",
                state.ctx.author_name
            );
            render_centered_message(f, chunks[1], &msg, theme.text);
        }
        FetchState::Loaded(papers) => {
            render_list(f, chunks[1], app, papers);
        }
    }

    let Some(state) = app.papers.as_ref() else {
        return;
    };
    let footer = if state.feed_request.is_loading() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_char(app.tick)),
                Style::default().fg(theme.spinner),
            ),
            Span::styled("Curating your feed...", Style::default().fg(theme.active)),
        ])
    } else {
        let select_all_label = if state.all_selected() {
            "deselect all"
        } else {
            "select all"
        };
        let mut spans = vec![Span::styled(
            format!(
                " Space toggle \u{00b7} a {select_all_label} \u{00b7} Enter get curated feed \u{00b7} Esc back \u{00b7} {} selected",
                state.selection.len()
            ),
            theme.footer_style(),
        )];
        if let Some(e) = state.feed_request.error() {
            spans.push(Span::styled(
                format!("  \u{2717} {}", truncate(e, 48)),
                Style::default().fg(theme.error),
            ));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

fn render_list(f: &mut Frame, area: Rect, app: &App, papers: &[Paper]) {
    let theme = &app.theme;
    let Some(state) = app.papers.as_ref() else {
        return;
    };

    let visible_papers = (area.height as usize / ROW_HEIGHT).max(1);
    // Scroll just far enough to keep the cursor row inside the window.
    let first = if state.cursor >= visible_papers {
        state.cursor + 1 - visible_papers
    } else {
        0
    };

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (idx, paper) in papers.iter().enumerate().skip(first).take(visible_papers) {
        let is_cursor = idx == state.cursor;
        let checked = state.selection.is_selected(&paper.id);
        let checkbox = if checked { "[x]" } else { "[ ]" };

        let title_style = if is_cursor {
            theme.highlight_style().fg(theme.text)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {checkbox} "),
                Style::default().fg(if checked { theme.active } else { theme.dim }),
            ),
            Span::styled(truncate(&paper.title, width.saturating_sub(8)), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", truncate(&paper.summary, width.saturating_sub(8))),
            Style::default().fg(theme.dim),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "      {}",
                truncate(&paper.authors_joined(), width.saturating_sub(8))
            ),
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}

pub(super) fn render_centered_message(
    f: &mut Frame,
    area: Rect,
    message: &str,
    color: ratatui::style::Color,
) {
    let lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(color))))
        .collect();
    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
