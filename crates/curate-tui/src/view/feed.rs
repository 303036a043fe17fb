use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use curate_core::{Paper, ScoreComponent, highlight, normalized_breakdown};

use crate::app::App;
use crate::theme::Theme;
use crate::view::papers::render_centered_message;
use crate::view::truncate;

/// Lines each feed entry occupies: title, summary, authors/date, score
/// bar, spacer.
const ROW_HEIGHT: usize = 5;

/// Width of the per-paper score breakdown bar in cells.
const BAR_WIDTH: usize = 24;

/// Render the curated feed screen.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(err) = app.missing_context() {
        render_centered_message(f, area, &format!("\u{2717} {err}"), theme.error);
        return;
    }
    let Some(state) = app.feed.as_ref() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // keyword strip
        Constraint::Min(5),    // feed list
        Constraint::Length(1), // footer
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" CURATE ", theme.header_style()),
        Span::styled(
            format!(" Similar Papers for {}", state.ctx.researcher.author_name),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} papers", state.ranked().len()),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let keyword_strip = if state.keywords().is_empty() {
        Line::from(Span::styled(
            " No keywords extracted",
            Style::default().fg(theme.dim),
        ))
    } else {
        let mut spans = vec![Span::styled(
            " Keywords: ",
            Style::default().fg(theme.dim),
        )];
        for (i, kw) in state.keywords().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{00b7} ", Style::default().fg(theme.dim)));
            }
            spans.push(Span::styled(kw.clone(), theme.emphasis_style()));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(keyword_strip), chunks[1]);

    if state.is_empty() {
        render_centered_message(
            f,
            chunks[2],
            "No similar papers found.\n\nEsc to go back and pick a different selection.",
            theme.text,
        );
    } else {
        render_feed_list(f, chunks[2], app);
    }

    let footer = Line::from(Span::styled(
        " j/k move \u{00b7} l score legend \u{00b7} Esc back to selection \u{00b7} q quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), chunks[3]);
}

fn render_feed_list(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(state) = app.feed.as_ref() else {
        return;
    };
    let papers = state.ranked();
    let keywords = state.keywords();

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
        let rank_badge = format!(" {:>2}. ", idx + 1);
        let badge_style = if is_cursor {
            theme.highlight_style().fg(theme.active)
        } else {
            Style::default().fg(theme.dim)
        };

        // Title with keyword emphasis
        let mut title_spans = vec![Span::styled(rank_badge, badge_style)];
        title_spans.extend(highlighted_spans(
            &truncate(&paper.title, width.saturating_sub(16)),
            keywords,
            theme,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
        if let Some(score) = paper.combined_score {
            title_spans.push(Span::styled(
                format!("  {score:.3}"),
                Style::default().fg(theme.active),
            ));
        }
        lines.push(Line::from(title_spans));

        // Summary with keyword emphasis
        let mut summary_spans = vec![Span::raw("      ")];
        summary_spans.extend(highlighted_spans(
            &truncate(&paper.summary, width.saturating_sub(8)),
            keywords,
            theme,
            Style::default().fg(theme.dim),
        ));
        lines.push(Line::from(summary_spans));

        // Authors and publication date
        let mut meta = paper.authors_joined();
        if !paper.published.is_empty() {
            if !meta.is_empty() {
                meta.push_str(" \u{00b7} ");
            }
            meta.push_str(paper.published_date());
        }
        lines.push(Line::from(Span::styled(
            format!("      {}", truncate(&meta, width.saturating_sub(8))),
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC),
        )));

        lines.push(score_bar_line(paper, theme, width));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Run the highlighter over `text` and style emphasized runs.
fn highlighted_spans(
    text: &str,
    keywords: &[String],
    theme: &Theme,
    base: Style,
) -> Vec<Span<'static>> {
    highlight(text, keywords)
        .into_iter()
        .map(|segment| {
            let style = if segment.emphasized {
                theme.emphasis_style()
            } else {
                base
            };
            Span::styled(segment.text, style)
        })
        .collect()
}

/// One stacked bar showing each signal's share of the paper's sub-scores,
/// followed by the pdf link when space allows.
fn score_bar_line(paper: &Paper, theme: &Theme, width: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("      ")];

    match normalized_breakdown(paper) {
        Some(shares) => {
            let mut cells_used = 0;
            let components = ScoreComponent::all();
            for (i, (&component, share)) in components.iter().zip(shares).enumerate() {
                let cells = if i == components.len() - 1 {
                    BAR_WIDTH.saturating_sub(cells_used)
                } else {
                    (share * BAR_WIDTH as f64).round() as usize
                };
                cells_used += cells;
                spans.push(Span::styled(
                    "\u{2588}".repeat(cells),
                    Style::default().fg(theme.score_color(component)),
                ));
            }
        }
        None => {
            spans.push(Span::styled(
                "\u{2591}".repeat(BAR_WIDTH),
                Style::default().fg(theme.dim),
            ));
        }
    }

    if !paper.pdf_url.is_empty() && width > BAR_WIDTH + 20 {
        spans.push(Span::styled(
            format!("  {}", truncate(&paper.pdf_url, width - BAR_WIDTH - 10)),
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    Line::from(spans)
}
