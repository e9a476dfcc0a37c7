//! # habitweek-core
//!
//! Static weekly routine catalog, the completion state store, and the
//! statistics derived from it.

pub mod board;
pub mod catalog;
pub mod completion;
pub mod constants;
pub mod error;
pub mod stats;
pub mod weekday;

// Re-exports
pub use board::WeekBoard;
pub use catalog::{Accent, RoutineStep, Step, ROUTINE, TIPS};
pub use completion::CompletionMap;
pub use constants::{
    exit_codes, DAY_COUNT, SOCIAL_MINUTES_PER_WINDOW, STEP_COUNT, TIP_COUNT,
    WRITING_MINUTES_PER_BLOCK,
};
pub use error::HabitError;
pub use stats::WeekStats;
pub use weekday::Weekday;
