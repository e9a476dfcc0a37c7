//! # habitweek-tui
//!
//! Interactive weekly checklist using ratatui with Elm architecture.

pub mod days;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod layout;
pub mod messages;
pub mod model;
pub mod notice;
pub mod progress;
pub mod steps;
pub mod styles;
pub mod tiles;
pub mod tips;

#[cfg(test)]
pub(crate) mod testing;

pub use keymap::KeyAction;
pub use layout::{ScreenLayout, Target};
pub use messages::TuiMessage;
pub use model::HabitApp;
