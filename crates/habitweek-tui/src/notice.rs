//! Notice drawn instead of the checklist when the terminal is too small.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// First line of the notice.
pub const TOO_SMALL: &str = "Terminál je příliš malý";

/// Render the notice, naming the size the checklist needs.
pub fn render_too_small(frame: &mut Frame, area: Rect, needed: (u16, u16), theme: &ColorTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

    let (width, height) = needed;
    let text = vec![
        Line::styled(
            TOO_SMALL,
            theme.text_style().fg(theme.warning).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(
                "potřeba aspoň {width}×{height}, nyní {}×{}",
                area.width, area.height
            ),
            theme.muted_style(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}
