//! Statistics derived from the completion table.
//!
//! Every function here is pure and recomputes from the table on each call;
//! nothing is cached.

use crate::catalog::Step;
use crate::completion::CompletionMap;
use crate::constants::{
    DAY_COUNT, SOCIAL_MINUTES_PER_WINDOW, STEP_COUNT, WRITING_MINUTES_PER_BLOCK,
};
use crate::weekday::Weekday;

/// Number of steps done on `day` (0..=4).
#[must_use]
pub fn count_done(map: &CompletionMap, day: Weekday) -> usize {
    map.iter().filter(|&(d, _, done)| d == day && done).count()
}

/// Share of the day's steps done, as a whole percent rounded half up.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn day_progress(map: &CompletionMap, day: Weekday) -> u8 {
    let done = count_done(map, day);
    ((done * 100 + STEP_COUNT / 2) / STEP_COUNT) as u8
}

/// Whether every step is done on `day`.
#[must_use]
pub fn all_steps_done_for_day(map: &CompletionMap, day: Weekday) -> bool {
    count_done(map, day) == STEP_COUNT
}

/// Number of days on which `step` is done.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn days_with(map: &CompletionMap, step: Step) -> u32 {
    map.iter().filter(|&(_, s, done)| s == step && done).count() as u32
}

/// Writing minutes credited this week.
#[must_use]
pub fn total_writing_minutes(map: &CompletionMap) -> u32 {
    days_with(map, Step::Writing) * WRITING_MINUTES_PER_BLOCK
}

/// Social-media minutes credited as saved this week.
#[must_use]
pub fn total_social_minutes_saved(map: &CompletionMap) -> u32 {
    days_with(map, Step::SocialWindow) * SOCIAL_MINUTES_PER_WINDOW
}

/// All derived values needed to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStats {
    pub active_day: Weekday,
    pub active_progress: u8,
    pub writing_minutes: u32,
    pub social_minutes_saved: u32,
    /// Completion badge per weekday, Monday first.
    pub days_complete: [bool; DAY_COUNT],
}

impl WeekStats {
    /// Derive a snapshot from the table for the given active day.
    #[must_use]
    pub fn compute(map: &CompletionMap, active_day: Weekday) -> Self {
        Self {
            active_day,
            active_progress: day_progress(map, active_day),
            writing_minutes: total_writing_minutes(map),
            social_minutes_saved: total_social_minutes_saved(map),
            days_complete: Weekday::ALL.map(|d| all_steps_done_for_day(map, d)),
        }
    }
}
