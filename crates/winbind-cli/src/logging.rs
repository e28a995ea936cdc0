//! Diagnostic logging to stderr.
//!
//! `-v` flags pick the default level; `WINBIND_LOG` (an `EnvFilter`
//! directive such as `winbind_compiler=trace`) overrides it.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WINBIND_LOG";

/// Default level for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
