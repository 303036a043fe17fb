use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::theme::Theme;

const LOGO: &[&str] = &[
    r"  ____ _   _ ____      _  _____ _____   ___ ___  ",
    r" / ___| | | |  _ \    / \|_   _| ____| |_ _/ _ \ ",
    r"| |   | | | | |_) |  / _ \ | | |  _|    | | | | |",
    r"| |___| |_| |  _ <  / ___ \| | | |___   | | |_| |",
    r" \____|\___/|_| \_\/_/   \_\_| |_____| |___\__\_\",
];

/// Landing screen: product blurb plus the three-step walkthrough.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(LOGO.len() as u16),
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .split(area);

    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                *l,
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    f.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        chunks[1],
    );

    let tagline = vec![
        Line::from(Span::styled(
            "The new way to discover research papers.",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Intelligent curation powered by multi-signal relevance ranking.",
            Style::default().fg(theme.dim),
        )),
    ];
    f.render_widget(
        Paragraph::new(tagline).alignment(Alignment::Center),
        chunks[2],
    );

    let steps = [
        (
            "1. Enter researcher information",
            "Provide your name and arXiv subject area to get started.",
        ),
        (
            "2. Personalize your feed",
            "We find your papers and ask which ones the feed should be based on.",
        ),
        (
            "3. Discover and explore",
            "The service curates the best recent papers, ranked by blended relevance.",
        ),
    ];
    let mut step_lines: Vec<Line> = vec![Line::from("")];
    for (title, description) in steps {
        step_lines.push(Line::from(Span::styled(
            title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        step_lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(theme.dim),
        )));
        step_lines.push(Line::from(""));
    }
    step_lines.push(Line::from(Span::styled(
        "Relevance blend: BM25 35% \u{00b7} TF-IDF 40% \u{00b7} Keyword 10% \u{00b7} Embedding 15%",
        Style::default().fg(theme.dim),
    )));
    f.render_widget(
        Paragraph::new(step_lines).alignment(Alignment::Center),
        chunks[3],
    );

    render_footer(f, chunks[4], theme);
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Line::from(Span::styled(
        " Enter get started \u{00b7} ? help \u{00b7} q quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
