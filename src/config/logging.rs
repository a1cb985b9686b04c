//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,connect_models=debug`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output
    #[default]
    Pretty,
    /// Single-line human-readable output
    Compact,
    /// JSON lines
    Json,
}

impl LoggingConfig {
    /// Build the filter described by this configuration
    pub fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.filter).map_err(|err| ValidationError::InvalidLogFilter {
            directive: self.filter.clone(),
            reason: err.to_string(),
        })
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.filter"));
        }
        self.env_filter().map(|_| ())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "info,connect_models=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "info,connect_models=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "   ".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.filter"))
        ));
    }

    #[test]
    fn test_unparseable_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "connect_models=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLogFilter { .. }));
        assert!(err.to_string().contains("connect_models=notalevel"));
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        let format: LogFormat = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(format, LogFormat::Compact);
        assert!(serde_json::from_str::<LogFormat>("\"Json\"").is_err());
    }
}
