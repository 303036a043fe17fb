use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use curate_core::FetchState;

use crate::app::App;
use crate::model::form::FormField;
use crate::theme::Theme;
use crate::view::spinner_char;

/// Render the researcher form screen.
pub fn render_in(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let form = &app.form;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(10),   // form body
        Constraint::Length(1), // footer
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" CURATE ", theme.header_style()),
        Span::styled(
            " Enter Researcher Details",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    // Centered form column
    let [form_area] = Layout::horizontal([Constraint::Length(60)])
        .flex(Flex::Center)
        .areas(chunks[1]);
    let [form_area] = Layout::vertical([Constraint::Length(12)])
        .flex(Flex::Center)
        .areas(form_area);

    let rows = Layout::vertical([
        Constraint::Length(3), // full name
        Constraint::Length(3), // subject area
        Constraint::Length(1),
        Constraint::Length(2), // status / error
    ])
    .split(form_area);

    render_field(
        f,
        rows[0],
        theme,
        FormField::FullName,
        &form.full_name,
        form.focus == FormField::FullName,
        app.tick,
    );
    render_field(
        f,
        rows[1],
        theme,
        FormField::SubjectArea,
        &form.subject_area,
        form.focus == FormField::SubjectArea,
        app.tick,
    );

    let status = match (&form.submission, &form.validation_error) {
        (FetchState::Loading, _) => Line::from(vec![
            Span::styled(
                format!("{} ", spinner_char(app.tick)),
                Style::default().fg(theme.spinner),
            ),
            Span::styled("Loading your papers...", Style::default().fg(theme.active)),
        ]),
        (FetchState::Error(e), _) => Line::from(Span::styled(
            format!("\u{2717} {e}"),
            Style::default().fg(theme.error),
        )),
        (_, Some(e)) => Line::from(Span::styled(
            format!("\u{2717} {e}"),
            Style::default().fg(theme.error),
        )),
        _ => Line::from(Span::styled(
            "Subject area must be an arXiv category code, e.g. cs.AI.",
            Style::default().fg(theme.dim),
        )),
    };
    f.render_widget(Paragraph::new(status), rows[3]);

    let footer = Line::from(Span::styled(
        " Tab switch field \u{00b7} Enter submit \u{00b7} Esc back \u{00b7} Ctrl+C quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), chunks[2]);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    field: FormField,
    value: &str,
    focused: bool,
    tick: usize,
) {
    let border_style = if focused {
        Style::default().fg(theme.active)
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(if focused { theme.active } else { theme.dim }),
        ));

    // Blinking block cursor on the focused field
    let cursor = if focused && tick % 10 < 5 { "\u{2588}" } else { "" };
    let content = Line::from(vec![
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
        Span::styled(cursor, Style::default().fg(theme.active)),
    ]);
    f.render_widget(Paragraph::new(content).block(block), area);
}
