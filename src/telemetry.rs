//! # Telemetry
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` takes precedence over [`LogSettings::level`]. The output
//! format follows [`LogSettings::format`].

use crate::config::{LogFormat, LogSettings};
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Error raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is malformed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Builds the event filter from `RUST_LOG`, falling back to `settings`.
///
/// # Errors
///
/// Returns `TelemetryError::Filter` if `RUST_LOG` is unset and the
/// configured level is not a valid filter directive.
pub fn env_filter(settings: &LogSettings) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&settings.level)?),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `TelemetryError::Filter` for a malformed level and
/// `TelemetryError::Init` if a subscriber was already installed.
pub fn init_tracing(settings: &LogSettings) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(settings)?);
    match settings.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(fmt::time::SystemTime)
                    .with_writer(std::io::stdout),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_writer(std::io::stdout),
            )
            .try_init()?,
    }
    tracing::debug!(format = ?settings.format, "tracing initialised");
    Ok(())
}
