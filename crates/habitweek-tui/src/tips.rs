//! Collapsible tips panel and its toggle button.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use habitweek_core::TIPS;

use crate::layout::TIP_BULLET;
use crate::styles::ColorTheme;

/// Button caption while the panel is closed.
pub const SHOW_LABEL: &str = "💡 Zobraz tipy pro úspěch";

/// Button caption while the panel is open.
pub const HIDE_LABEL: &str = "▲ Skrýt tipy";

/// Render the button that opens and closes the panel.
pub fn render_tips_button(frame: &mut Frame, area: Rect, visible: bool, theme: &ColorTheme) {
    let label = if visible { HIDE_LABEL } else { SHOW_LABEL };
    let paragraph = Paragraph::new(Line::styled(
        label,
        theme.text_style().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render the static tips list.
///
/// The area should be [`crate::layout::tips_height`] rows tall for its width.
pub fn render_tips(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let arrow = Style::default()
        .fg(theme.warning)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = TIPS
        .iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled(TIP_BULLET, arrow),
                Span::styled(*tip, theme.text_style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
