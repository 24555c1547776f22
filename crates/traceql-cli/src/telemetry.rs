//! Log output for the CLI.
//!
//! Library events go to stderr through a `tracing-subscriber` fmt layer. `RUST_LOG`
//! overrides the level picked from `-v`.

use std::io::{self, IsTerminal};

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Default filter for a `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) -> Result<(), TelemetryError> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(default_filter(verbosity)),
    }
    .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(2), "trace");
        assert_eq!(default_filter(7), "trace");
    }

    #[test]
    fn default_filters_parse() {
        for verbosity in 0..3 {
            assert!(EnvFilter::try_new(default_filter(verbosity)).is_ok());
        }
    }
}
