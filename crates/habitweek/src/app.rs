//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use habitweek_core::WeekBoard;
use habitweek_tui::HabitApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_tui(config)
}

/// Build the board from the configuration; fails on an unknown day.
pub fn initial_board(config: &AppConfig) -> Result<WeekBoard> {
    let day = config.start_day()?;
    Ok(WeekBoard::with_selection(day, config.tips))
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let board = initial_board(config)?;
    info!(
        day = %board.active_day(),
        tips = board.tips_visible(),
        mouse = !config.no_mouse,
        "Starting checklist"
    );

    let mut app = HabitApp::new(board).with_mouse(!config.no_mouse);
    app.run().context("terminal session failed")?;

    let stats = app.board.stats();
    info!(
        writing_minutes = stats.writing_minutes,
        social_minutes_saved = stats.social_minutes_saved,
        "Checklist closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use habitweek_core::Weekday;

    #[test]
    fn initial_board_from_flags() {
        let config = AppConfig::try_parse_from(["habitweek", "--day", "Ne", "--tips"]).unwrap();
        let board = initial_board(&config).unwrap();
        assert_eq!(board.active_day(), Weekday::Sunday);
        assert!(board.tips_visible());
        assert_eq!(board.total_writing_minutes(), 0);
    }

    #[test]
    fn initial_board_rejects_unknown_day() {
        let config = AppConfig::try_parse_from(["habitweek", "--day", "Mo"]).unwrap();
        let err = initial_board(&config).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
        assert!(err.to_string().contains("unknown weekday"));
    }
}
