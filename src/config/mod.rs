//! Runtime configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `CONNECT_MODELS` prefix and nested values
//! use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use connect_models::config::ModelsConfig;
//!
//! let config = ModelsConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! connect_models::telemetry::init_tracing(&config.logging).expect("Failed to init tracing");
//! ```

mod error;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use std::path::Path;

use serde::Deserialize;

const ENV_PREFIX: &str = "CONNECT_MODELS";
const ENV_SEPARATOR: &str = "__";

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsConfig {
    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ModelsConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONNECT_MODELS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CONNECT_MODELS__LOGGING__FILTER=debug` -> `logging.filter = "debug"`
    /// - `CONNECT_MODELS__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking precedence
    ///
    /// The file format (TOML, YAML, JSON) is inferred from the extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
    }
}
