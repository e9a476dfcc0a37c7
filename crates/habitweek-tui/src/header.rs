//! TUI header line.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Title of the checklist.
pub const TITLE: &str = "Méně scrollování, více psaní";

/// Subtitle after the title.
pub const SUBTITLE: &str = "Denní rutina pro autora webu";

/// Render the header line.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let line = Line::from(vec![
        Span::raw("🖊️ "),
        Span::styled(TITLE, theme.header_style()),
        Span::styled(" · ", theme.border_style()),
        Span::styled(SUBTITLE, theme.muted_style()),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
