//! Error handling and exit codes.

use habitweek_core::{exit_codes, HabitError};

/// Map an application error to its process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<HabitError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// [`exit_code`] narrowed to the byte the OS reports.
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> u8 {
    u8::try_from(exit_code(err)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let config = anyhow::Error::new(HabitError::UnknownWeekday("x".into()));
        assert_eq!(exit_code(&config), 4);

        let io = anyhow::Error::new(std::io::Error::other("no tty"));
        assert_eq!(exit_code(&io), 1);
        assert_eq!(exit_status(&io), 1);
    }

    #[test]
    fn context_keeps_config_code() {
        let err = anyhow::Error::new(HabitError::UnknownStep(9)).context("reading --day");
        assert_eq!(exit_code(&err), 4);
    }
}
