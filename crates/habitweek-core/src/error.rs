//! Error type for the permissive (string / integer) entry points.

/// Errors raised when an identifier does not belong to the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HabitError {
    /// The weekday label is not one of the seven known labels.
    #[error("unknown weekday: {0:?} (expected one of Po, Út, St, Čt, Pá, So, Ne or Mon..Sun)")]
    UnknownWeekday(String),

    /// The step id is outside 1..=4.
    #[error("unknown routine step: {0} (expected 1..=4)")]
    UnknownStep(u8),
}
