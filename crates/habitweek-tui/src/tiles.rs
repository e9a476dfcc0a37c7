//! Weekly stat tiles.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use habitweek_core::WeekStats;

use crate::layout::ScreenLayout;
use crate::styles::ColorTheme;

/// Caption of the writing tile.
pub const WRITING_CAPTION: &str = "Celkem psaní tento týden";

/// Caption of the saved-time tile.
pub const SAVED_CAPTION: &str = "Ušetřeno na sítích tento týden";

/// Render the two tiles side by side.
pub fn render_tiles(frame: &mut Frame, area: Rect, stats: &WeekStats, theme: &ColorTheme) {
    let (writing_area, saved_area) = ScreenLayout::split_tiles(area);
    render_tile(
        frame,
        writing_area,
        stats.writing_minutes,
        WRITING_CAPTION,
        Style::default().fg(theme.primary),
        theme,
    );
    render_tile(
        frame,
        saved_area,
        stats.social_minutes_saved,
        SAVED_CAPTION,
        theme.success_style(),
        theme,
    );
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    minutes: u32,
    caption: &str,
    value_style: Style,
    theme: &ColorTheme,
) {
    let line = Line::from(vec![
        Span::styled(
            format!("{minutes} min"),
            value_style.add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(caption, theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
