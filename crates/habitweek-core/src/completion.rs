//! Completion table: one done flag per (weekday, step) pair.

use crate::catalog::Step;
use crate::constants::{DAY_COUNT, STEP_COUNT};
use crate::weekday::Weekday;

/// Done flags for the whole week.
///
/// Backed by a fixed 7x4 table, so every (weekday, step) pair always has
/// exactly one entry and entries can only be flipped, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionMap {
    cells: [[bool; STEP_COUNT]; DAY_COUNT],
}

impl CompletionMap {
    /// Create a table with every entry not done.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `step` is done on `day`.
    #[must_use]
    pub fn get(&self, day: Weekday, step: Step) -> bool {
        self.cells[day.index()][step.index()]
    }

    /// Flip the entry for (`day`, `step`) and return its new value.
    pub fn flip(&mut self, day: Weekday, step: Step) -> bool {
        let cell = &mut self.cells[day.index()][step.index()];
        *cell = !*cell;
        *cell
    }

    /// Iterate over all 28 entries, Monday first, steps in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Step, bool)> + '_ {
        Weekday::ALL.into_iter().flat_map(move |day| {
            Step::ALL
                .into_iter()
                .map(move |step| (day, step, self.get(day, step)))
        })
    }
}
