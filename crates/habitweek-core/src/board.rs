//! The week board: the single owner of all mutable state.

use tracing::debug;

use crate::catalog::Step;
use crate::completion::CompletionMap;
use crate::stats::{self, WeekStats};
use crate::weekday::Weekday;

/// Completion table plus the UI selection state.
///
/// The selected day and the tips flag never affect the completion table,
/// and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekBoard {
    completion: CompletionMap,
    active_day: Weekday,
    tips_visible: bool,
}

impl WeekBoard {
    /// Fresh board: nothing done, Monday selected, tips hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh board with a chosen starting day and tips state.
    #[must_use]
    pub fn with_selection(active_day: Weekday, tips_visible: bool) -> Self {
        Self {
            completion: CompletionMap::new(),
            active_day,
            tips_visible,
        }
    }

    // ---------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------

    /// Flip `step` on `day`, leaving every other entry untouched.
    pub fn toggle(&mut self, day: Weekday, step: Step) {
        let done = self.completion.flip(day, step);
        debug!(day = %day, step = step.id(), done, "Toggled step");
    }

    /// Flip `step` on the selected day.
    pub fn toggle_active(&mut self, step: Step) {
        self.toggle(self.active_day, step);
    }

    /// Select the day shown in the checklist.
    pub fn select_day(&mut self, day: Weekday) {
        debug!(from = %self.active_day, to = %day, "Selected day");
        self.active_day = day;
    }

    /// Select the following day, wrapping around.
    pub fn next_day(&mut self) {
        self.select_day(self.active_day.next());
    }

    /// Select the preceding day, wrapping around.
    pub fn prev_day(&mut self) {
        self.select_day(self.active_day.prev());
    }

    /// Show or hide the tips panel.
    pub fn set_tips_visible(&mut self, visible: bool) {
        debug!(visible, "Tips panel");
        self.tips_visible = visible;
    }

    /// Flip the tips panel visibility.
    pub fn toggle_tips(&mut self) {
        self.set_tips_visible(!self.tips_visible);
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    #[must_use]
    pub fn is_done(&self, day: Weekday, step: Step) -> bool {
        self.completion.get(day, step)
    }

    #[must_use]
    pub fn active_day(&self) -> Weekday {
        self.active_day
    }

    #[must_use]
    pub fn tips_visible(&self) -> bool {
        self.tips_visible
    }

    #[must_use]
    pub fn completion(&self) -> &CompletionMap {
        &self.completion
    }

    /// Percent of `day`'s steps done, see [`stats::day_progress`].
    #[must_use]
    pub fn day_progress(&self, day: Weekday) -> u8 {
        stats::day_progress(&self.completion, day)
    }

    #[must_use]
    pub fn count_done(&self, day: Weekday) -> usize {
        stats::count_done(&self.completion, day)
    }

    #[must_use]
    pub fn total_writing_minutes(&self) -> u32 {
        stats::total_writing_minutes(&self.completion)
    }

    #[must_use]
    pub fn total_social_minutes_saved(&self) -> u32 {
        stats::total_social_minutes_saved(&self.completion)
    }

    #[must_use]
    pub fn all_steps_done_for_day(&self, day: Weekday) -> bool {
        stats::all_steps_done_for_day(&self.completion, day)
    }

    /// Snapshot of every derived value for the selected day.
    #[must_use]
    pub fn stats(&self) -> WeekStats {
        WeekStats::compute(&self.completion, self.active_day)
    }
}
