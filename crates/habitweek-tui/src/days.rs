//! Day selector row.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use habitweek_core::{WeekStats, Weekday, DAY_COUNT};

use crate::styles::ColorTheme;

/// Badge appended to fully completed days.
pub const DONE_BADGE: &str = "✓";

/// Render one cell per weekday, highlighting the selected one.
pub fn render_days(
    frame: &mut Frame,
    cells: &[Rect; DAY_COUNT],
    stats: &WeekStats,
    theme: &ColorTheme,
) {
    for (day, cell) in Weekday::ALL.into_iter().zip(cells) {
        let complete = stats.days_complete[day.index()];
        let style = if day == stats.active_day {
            theme.active_day_style()
        } else if complete {
            theme.success_style()
        } else {
            theme.text_style()
        };
        let label = if complete {
            format!("{} {DONE_BADGE}", day.label())
        } else {
            day.label().to_string()
        };

        let paragraph = Paragraph::new(Line::from(label))
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ScreenLayout;
    use crate::testing;
    use habitweek_core::{Step, WeekBoard};

    fn draw(board: &WeekBoard) -> ratatui::buffer::Buffer {
        let theme = ColorTheme::default();
        let stats = board.stats();
        testing::draw(70, 1, |frame, area| {
            let cells = ScreenLayout::split_days(area);
            render_days(frame, &cells, &stats, &theme);
        })
    }

    #[test]
    fn all_labels_rendered_in_order() {
        let buf = draw(&WeekBoard::new());
        let row = testing::row(&buf, 0);
        let positions: Vec<usize> = Weekday::ALL
            .iter()
            .map(|d| row.find(d.label()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
        assert!(!row.contains(DONE_BADGE));
    }

    #[test]
    fn active_day_highlighted() {
        let mut board = WeekBoard::new();
        board.select_day(Weekday::Wednesday);
        let buf = draw(&board);
        let cells = ScreenLayout::split_days(buf.area);
        let theme = ColorTheme::default();

        let wed = cells[Weekday::Wednesday.index()];
        let x = (wed.x..wed.right())
            .find(|&x| buf[(x, 0)].symbol() == "S")
            .unwrap();
        assert_eq!(buf[(x, 0)].bg, theme.primary);
        // The whole cell is highlighted, not only the label.
        assert_eq!(buf[(wed.x, 0)].bg, theme.primary);

        let mon = cells[0];
        let x = (mon.x..mon.right())
            .find(|&x| buf[(x, 0)].symbol() == "P")
            .unwrap();
        assert_ne!(buf[(x, 0)].bg, theme.primary);
    }

    #[test]
    fn completed_day_badged() {
        let mut board = WeekBoard::new();
        for step in Step::ALL {
            board.toggle(Weekday::Friday, step);
        }
        let buf = draw(&board);
        let cells = ScreenLayout::split_days(buf.area);
        let fri = cells[Weekday::Friday.index()];
        let cell_text: String = (fri.x..fri.right())
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(cell_text.contains(DONE_BADGE));
        assert_eq!(testing::row(&buf, 0).matches(DONE_BADGE).count(), 1);
    }
}
