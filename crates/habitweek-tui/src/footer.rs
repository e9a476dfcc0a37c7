//! TUI footer line.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Instruction shown before the key hints.
pub const INSTRUCTION: &str = "Klikni na krok pro označení jako hotovo ✓";

/// Render the footer line with the instruction and keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let key = Style::default().fg(Color::Yellow);
    let line = Line::from(vec![
        Span::styled(INSTRUCTION, theme.muted_style()),
        Span::raw("  "),
        Span::styled("1-4", key),
        Span::raw(" krok · "),
        Span::styled("←/→", key),
        Span::raw(" den · "),
        Span::styled("t", key),
        Span::raw(" tipy · "),
        Span::styled("q", key),
        Span::raw(" konec"),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn render_footer_does_not_panic() {
        let theme = ColorTheme::default();
        testing::draw(80, 1, |frame, area| render_footer(frame, area, &theme));
    }

    #[test]
    fn render_footer_contains_instruction() {
        let theme = ColorTheme::default();
        let buf = testing::draw(80, 1, |frame, area| render_footer(frame, area, &theme));
        assert!(testing::row(&buf, 0).contains("Klikni na krok"));
    }

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let theme = ColorTheme::default();
        let buf = testing::draw(80, 1, |frame, area| render_footer(frame, area, &theme));
        let content = testing::row(&buf, 0);
        assert!(content.contains("krok"));
        assert!(content.contains("den"));
        assert!(content.contains("tipy"));
        assert!(content.contains("konec"));
    }

    #[test]
    fn render_footer_small_area() {
        let theme = ColorTheme::default();
        testing::draw(20, 1, |frame, area| render_footer(frame, area, &theme));
    }
}
