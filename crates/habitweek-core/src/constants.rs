//! Fixed sizes and reward constants.

/// Number of weekdays tracked.
pub const DAY_COUNT: usize = 7;

/// Number of routine steps per day.
pub const STEP_COUNT: usize = 4;

/// Number of entries in the tips panel.
pub const TIP_COUNT: usize = 4;

/// Minutes credited for each completed writing block.
///
/// A symbolic reward, not a measured duration.
pub const WRITING_MINUTES_PER_BLOCK: u32 = 37;

/// Minutes credited as "saved" for each respected social-media window.
///
/// A symbolic reward, not a measured duration.
pub const SOCIAL_MINUTES_PER_WINDOW: u32 = 75;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error (terminal I/O and the like).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_dimensions() {
        assert_eq!(DAY_COUNT * STEP_COUNT, 28);
    }

    #[test]
    fn exit_codes_distinct() {
        assert_ne!(exit_codes::ERROR_GENERIC, exit_codes::ERROR_CONFIG);
        // Zero is reserved for success.
        assert_ne!(exit_codes::ERROR_GENERIC, 0);
        assert_ne!(exit_codes::ERROR_CONFIG, 0);
    }
}
