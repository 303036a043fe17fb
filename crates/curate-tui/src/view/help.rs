use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::view::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "confirm / submit / open next screen"),
    ("Esc", "back to the previous screen"),
    ("Tab", "next form field"),
    ("j / k, \u{2191} / \u{2193}", "move the cursor"),
    ("g / G", "jump to top / bottom"),
    ("Ctrl+d / Ctrl+u", "page down / up"),
    ("Space", "toggle paper selection"),
    ("a", "select or deselect all papers"),
    ("l", "toggle the score legend (feed)"),
    ("?", "toggle this help"),
    ("q, Ctrl+C", "quit"),
];

/// Keyboard shortcut overlay.
pub fn render(f: &mut Frame, theme: &Theme) {
    let height = BINDINGS.len() as u16 + 4;
    let area = centered_rect(56, height, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<16}"),
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  ? or Esc to close",
        Style::default().fg(theme.dim),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Keyboard Shortcuts ", theme.header_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
