//! Step cards for the selected day.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use habitweek_core::{RoutineStep, WeekBoard, ROUTINE, STEP_COUNT};

use crate::styles::ColorTheme;

/// Check box shown on a done card.
pub const CHECKED: &str = "[✓]";

/// Check box shown on a pending card.
pub const UNCHECKED: &str = "[ ]";

/// Render the four cards for the board's selected day.
pub fn render_steps(
    frame: &mut Frame,
    cards: &[Rect; STEP_COUNT],
    board: &WeekBoard,
    theme: &ColorTheme,
) {
    let day = board.active_day();
    for (entry, area) in ROUTINE.iter().zip(cards) {
        render_card(frame, *area, entry, board.is_done(day, entry.step), theme);
    }
}

/// Render a single card.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    entry: &RoutineStep,
    done: bool,
    theme: &ColorTheme,
) {
    let accent = theme.accent(entry.accent);
    let (check, check_style, border_style, desc_style) = if done {
        (
            CHECKED,
            theme.success_style().add_modifier(Modifier::BOLD),
            theme.muted_style(),
            theme.done_style(),
        )
    } else {
        (
            UNCHECKED,
            theme.muted_style(),
            Style::default().fg(accent),
            theme.text_style(),
        )
    };

    let title = Line::from(vec![
        Span::styled(format!(" {check} "), check_style),
        Span::styled(
            format!("{}. ", entry.step.id()),
            theme.muted_style(),
        ),
        Span::raw(format!("{} ", entry.emoji)),
        Span::styled(
            entry.title,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(format!("· {} ", entry.time), Style::default().fg(accent)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let paragraph = Paragraph::new(Span::styled(entry.description, desc_style))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
