//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file, if
//! present) with the `RECURRENTE_` prefix. Nested sections use a double
//! underscore: `RECURRENTE_HTTP__TIMEOUT_SECS` -> `http.timeout_secs`.
//!
//! # Example
//!
//! ```no_run
//! use recurrente_mcp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.base_url);
//! ```

mod error;
mod http;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use http::HttpConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::adapters::recurrente::DEFAULT_BASE_URL;

/// Root application configuration
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// API public key (`RECURRENTE_PUBLIC_KEY`)
    #[serde(default)]
    pub public_key: String,

    /// API secret key (`RECURRENTE_SECRET_KEY`)
    #[serde(default)]
    pub secret_key: String,

    /// API base URL (`RECURRENTE_BASE_URL`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub log: LoggingConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing keys are not an error here; call [`AppConfig::validate`]
    /// before using the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("RECURRENTE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a missing key, a non-HTTP base URL, an
    /// out-of-range timeout or an unparseable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.public_key.is_empty() {
            return Err(ValidationError::MissingRequired("RECURRENTE_PUBLIC_KEY"));
        }
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("RECURRENTE_SECRET_KEY"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        self.http.validate()?;
        self.log.validate()?;
        Ok(())
    }

    /// True for sandbox key pairs.
    pub fn is_test_mode(&self) -> bool {
        self.public_key.starts_with("pk_test_")
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("public_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .field("log", &self.log)
            .finish()
    }
}
