//! Progress gauge for the selected day.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Gauge;
use ratatui::Frame;

use habitweek_core::Weekday;

use crate::styles::ColorTheme;

/// Render the selected day's completion gauge.
pub fn render_progress(
    frame: &mut Frame,
    area: Rect,
    day: Weekday,
    percent: u8,
    theme: &ColorTheme,
) {
    let percent = percent.min(100);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.primary).bg(theme.muted))
        .label(Span::styled(
            format!("{day} – dnešní pokrok · {percent}%"),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .percent(u16::from(percent));

    frame.render_widget(gauge, area);
}
