//! HabitWeek — weekly writing-routine checklist.

use std::process::ExitCode;

use habitweek_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    logging::init(config.verbose);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(errors::exit_status(&err))
        }
    }
}
