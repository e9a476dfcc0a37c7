//! HabitWeek library — configuration and dispatch for the checklist binary.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod logging;
