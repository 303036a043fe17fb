use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use curate_core::ScoreComponent;

use crate::theme::Theme;
use crate::view::centered_rect;

/// Centered popup explaining the combined-score blend.
pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(46, 10, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "How papers are scored",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for &component in ScoreComponent::all() {
        lines.push(Line::from(vec![
            Span::styled(
                "  \u{2588}\u{2588} ",
                Style::default().fg(theme.score_color(component)),
            ),
            Span::styled(
                format!("{:<22}", component.label()),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:>3.0}%", component.legend_weight() * 100.0),
                Style::default().fg(theme.dim),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  l or Esc to close",
        Style::default().fg(theme.dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Score Legend ", theme.header_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
