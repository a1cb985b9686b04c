//! Tracing subscriber setup.

use tracing_subscriber::fmt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Installs the global `tracing` subscriber described by `config`.
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` for an unusable filter and
/// `ConfigError::TracingAlreadyInitialized` if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let env_filter = config.env_filter()?;

    let builder = fmt().with_env_filter(env_filter).with_target(true);
    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().finish().try_init(),
        LogFormat::Compact => builder.compact().finish().try_init(),
        LogFormat::Json => builder.json().with_current_span(true).finish().try_init(),
    };
    installed.map_err(|_| ConfigError::TracingAlreadyInitialized)?;

    tracing::debug!(format = ?config.format, filter = %config.filter, "tracing initialized");
    Ok(())
}
