use ratatui::style::{Color, Modifier, Style};

use curate_core::ScoreComponent;

/// Color theme for the TUI.
pub struct Theme {
    pub score_bm25: Color,
    pub score_tfidf: Color,
    pub score_keyword: Color,
    pub score_embedding: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub error: Color,
    /// Foreground for keyword-emphasized text runs.
    pub emphasis: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            score_bm25: Color::Rgb(0, 210, 0),
            score_tfidf: Color::Cyan,
            score_keyword: Color::Yellow,
            score_embedding: Color::Magenta,

            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            error: Color::Red,
            emphasis: Color::Rgb(0, 210, 0),
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Modern theme: white text, electric blue accents, dark blue header.
    pub fn modern() -> Self {
        Self {
            score_bm25: Color::Rgb(0, 200, 80),
            score_tfidf: Color::Rgb(60, 140, 255),
            score_keyword: Color::Rgb(255, 200, 0),
            score_embedding: Color::Rgb(200, 50, 200),

            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            active: Color::Rgb(60, 140, 255),
            error: Color::Rgb(255, 80, 80),
            emphasis: Color::Rgb(60, 140, 255),
            spinner: Color::Rgb(60, 140, 255),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn score_color(&self, component: ScoreComponent) -> Color {
        match component {
            ScoreComponent::Bm25 => self.score_bm25,
            ScoreComponent::TfIdf => self.score_tfidf,
            ScoreComponent::Keyword => self.score_keyword,
            ScoreComponent::Embedding => self.score_embedding,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn emphasis_style(&self) -> Style {
        Style::default()
            .fg(self.emphasis)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
