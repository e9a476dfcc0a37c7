//! TUI styles and color theme.

use habitweek_core::Accent;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the checklist.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for the title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for success text.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get the style for plain borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Foreground color for a step's styling tag.
    #[must_use]
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Amber => Color::Yellow,
            Accent::Blue => Color::LightBlue,
            Accent::Purple => Color::Magenta,
            Accent::Green => Color::Green,
        }
    }

    /// The selected day in the day selector.
    #[must_use]
    pub fn active_day_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Description text of a step that is done.
    #[must_use]
    pub fn done_style(&self) -> Style {
        self.muted_style().add_modifier(Modifier::CROSSED_OUT)
    }
}
