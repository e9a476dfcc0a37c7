//! Application configuration from CLI flags and environment.

use clap::Parser;
use habitweek_core::{HabitError, Weekday};

/// HabitWeek — less scrolling, more writing: a weekly routine checklist.
#[derive(Parser, Debug)]
#[command(name = "habitweek", version, about)]
pub struct AppConfig {
    /// Day selected at start-up (Po..Ne or Mon..Sun).
    #[arg(short, long, default_value = "Po", env = "HABITWEEK_DAY")]
    pub day: String,

    /// Start with the tips panel open.
    #[arg(long)]
    pub tips: bool,

    /// Do not capture the mouse (keyboard only).
    #[arg(long)]
    pub no_mouse: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The configured start-up day.
    pub fn start_day(&self) -> Result<Weekday, HabitError> {
        self.day.parse()
    }
}
