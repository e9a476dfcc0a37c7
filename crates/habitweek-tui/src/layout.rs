//! Screen layout and click hit-testing.
//!
//! Rendering and mouse handling share [`ScreenLayout::compute`], so a click
//! always lands on the widget drawn under it.

use habitweek_core::{Step, Weekday, DAY_COUNT, STEP_COUNT, TIPS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A clickable element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Day(Weekday),
    Step(Step),
    TipsButton,
}

/// Areas of every panel for one terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub tiles: Rect,
    pub days: [Rect; DAY_COUNT],
    pub progress: Rect,
    pub steps: [Rect; STEP_COUNT],
    pub tips_button: Rect,
    /// Present only while the tips panel is open.
    pub tips: Option<Rect>,
    pub footer: Rect,
}

/// Narrowest terminal the checklist is drawn in.
pub const MIN_WIDTH: u16 = 80;

/// Smallest card: title border, one description line, bottom border.
pub const CARD_MIN_HEIGHT: u16 = 3;

/// Single-row panels: header, tiles, days, progress, tips button, footer.
const FIXED_ROWS: u16 = 6;

#[allow(clippy::cast_possible_truncation)]
const CARDS_MIN_HEIGHT: u16 = CARD_MIN_HEIGHT * STEP_COUNT as u16;

/// Prefix drawn before every tip.
pub const TIP_BULLET: &str = "→ ";

impl ScreenLayout {
    /// Compute the vertical stack of panels.
    ///
    /// Returns `None` when the area is smaller than [`min_size`]; panels
    /// are never squeezed below their own height.
    #[must_use]
    pub fn compute(area: Rect, tips_visible: bool) -> Option<Self> {
        let (min_width, min_height) = min_size(area.width, tips_visible);
        if area.width < min_width || area.height < min_height {
            return None;
        }

        let tips_height = if tips_visible {
            tips_height(area.width)
        } else {
            0
        };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                // header
                Constraint::Length(1),                // stat tiles
                Constraint::Length(1),                // day selector
                Constraint::Length(1),                // progress
                Constraint::Min(CARDS_MIN_HEIGHT),    // step cards
                Constraint::Length(1),                // tips button
                Constraint::Length(tips_height),      // tips panel
                Constraint::Length(1),                // footer
            ])
            .split(area);

        Some(Self {
            header: outer[0],
            tiles: outer[1],
            days: Self::split_days(outer[2]),
            progress: outer[3],
            steps: Self::split_steps(outer[4]),
            tips_button: outer[5],
            tips: tips_visible.then_some(outer[6]),
            footer: outer[7],
        })
    }

    /// Split the day selector row into seven equal cells.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn split_days(area: Rect) -> [Rect; DAY_COUNT] {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, DAY_COUNT as u32); DAY_COUNT])
            .split(area);
        std::array::from_fn(|i| cells[i])
    }

    /// Split the card area into four equal cards.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn split_steps(area: Rect) -> [Rect; STEP_COUNT] {
        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, STEP_COUNT as u32); STEP_COUNT])
            .split(area);
        std::array::from_fn(|i| cards[i])
    }

    /// Split the tiles row into the writing and social-media tiles.
    #[must_use]
    pub fn split_tiles(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// The clickable element at a terminal cell, if any.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(i) = self.days.iter().position(|r| contains(*r, column, row)) {
            return Some(Target::Day(Weekday::ALL[i]));
        }
        if let Some(i) = self.steps.iter().position(|r| contains(*r, column, row)) {
            return Some(Target::Step(Step::ALL[i]));
        }
        if contains(self.tips_button, column, row) {
            return Some(Target::TipsButton);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Smallest (width, height) that fits every panel at `width`.
#[must_use]
pub fn min_size(width: u16, tips_visible: bool) -> (u16, u16) {
    let tips = if tips_visible {
        tips_height(width.max(MIN_WIDTH))
    } else {
        0
    };
    (MIN_WIDTH, FIXED_ROWS + CARDS_MIN_HEIGHT + tips)
}

/// Rows the word-wrapped tips list needs at `width`.
#[must_use]
pub fn tips_height(width: u16) -> u16 {
    TIPS.iter()
        .map(|tip| wrapped_lines(&format!("{TIP_BULLET}{tip}"), usize::from(width)))
        .sum()
}

/// Greedy word-wrap line count, matching `Wrap { trim: true }` for
/// single-width text.
#[allow(clippy::cast_possible_truncation)]
fn wrapped_lines(text: &str, width: usize) -> u16 {
    let width = width.max(1);
    let mut lines = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used == 0 {
            used = len;
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            lines += 1;
            used = len;
        }
        while used > width {
            lines += 1;
            used -= width;
        }
    }
    lines as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(width: u16, height: u16, tips: bool) -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, width, height), tips).unwrap()
    }

    #[test]
    fn panels_stack_top_to_bottom() {
        let layout = at(80, 24, true);
        assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.tiles.y, 1);
        assert_eq!(layout.days[0].y, 2);
        assert_eq!(layout.progress.y, 3);
        assert_eq!(layout.steps[0].y, 4);
        assert_eq!(layout.tips_button.y, 17);
        let tips = layout.tips.unwrap();
        assert_eq!(tips, Rect::new(0, 18, 80, 5));
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn every_card_fits_a_description_line_at_80x24() {
        for tips in [false, true] {
            let layout = at(80, 24, tips);
            for card in layout.steps {
                assert!(card.height >= CARD_MIN_HEIGHT, "{tips}: {card:?}");
            }
            assert_eq!(layout.steps[3].bottom(), layout.tips_button.y);
        }
    }

    #[test]
    fn hidden_tips_give_cards_the_space() {
        let open = at(80, 24, true);
        let closed = at(80, 24, false);
        assert!(closed.tips.is_none());
        let open_cards: u16 = open.steps.iter().map(|r| r.height).sum();
        let closed_cards: u16 = closed.steps.iter().map(|r| r.height).sum();
        assert_eq!(closed_cards, open_cards + 5);
    }

    #[test]
    fn too_small_area_has_no_layout() {
        assert!(ScreenLayout::compute(Rect::new(0, 0, 79, 40), false).is_none());
        assert!(ScreenLayout::compute(Rect::new(0, 0, 80, 17), false).is_none());
        assert!(ScreenLayout::compute(Rect::new(0, 0, 80, 18), false).is_some());
        assert!(ScreenLayout::compute(Rect::new(0, 0, 80, 22), true).is_none());
        assert!(ScreenLayout::compute(Rect::new(0, 0, 80, 23), true).is_some());
    }

    #[test]
    fn min_size_grows_with_open_tips() {
        assert_eq!(min_size(80, false), (80, 18));
        assert_eq!(min_size(80, true), (80, 23));
        assert_eq!(min_size(120, true), (80, 22));
        // Narrower than the minimum is measured at the minimum.
        assert_eq!(min_size(40, true), (80, 23));
    }

    #[test]
    fn tips_wrap_by_width() {
        assert_eq!(tips_height(80), 5);
        assert_eq!(tips_height(120), 4);
        assert_eq!(wrapped_lines("aa bb cc", 5), 2);
        assert_eq!(wrapped_lines("abcdefgh", 4), 2);
        assert_eq!(wrapped_lines("", 10), 1);
    }

    #[test]
    fn day_cells_cover_the_row() {
        let layout = at(100, 30, false);
        let width: u16 = layout.days.iter().map(|r| r.width).sum();
        assert_eq!(width, 100);
        for pair in layout.days.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
    }

    #[test]
    fn hit_test_days_steps_and_button() {
        let layout = at(80, 24, false);
        let cell = layout.days[3];
        assert_eq!(
            layout.target_at(cell.x, cell.y),
            Some(Target::Day(Weekday::Thursday))
        );
        let card = layout.steps[1];
        assert_eq!(
            layout.target_at(card.x + 5, card.bottom() - 1),
            Some(Target::Step(Step::Writing))
        );
        let button = layout.tips_button;
        assert_eq!(
            layout.target_at(button.x + 1, button.y),
            Some(Target::TipsButton)
        );
    }

    #[test]
    fn hit_test_misses() {
        let layout = at(80, 24, true);
        assert_eq!(layout.target_at(2, layout.header.y), None);
        assert_eq!(layout.target_at(2, layout.progress.y), None);
        let tips = layout.tips.unwrap();
        assert_eq!(layout.target_at(2, tips.y + 1), None);
        assert_eq!(layout.target_at(500, 500), None);
    }
}
