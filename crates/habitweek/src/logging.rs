//! Tracing setup for the binary.
//!
//! Events go to stderr so they never land inside the alternate screen.
//! `RUST_LOG` takes precedence; without it the level is `warn`, or `debug`
//! with `--verbose`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build the event filter from the verbosity flag and a `RUST_LOG` value.
#[must_use]
pub fn filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Install the global fmt subscriber, reading `RUST_LOG` from the
/// environment.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(verbose, rust_log.as_deref()))
        .init();
}
