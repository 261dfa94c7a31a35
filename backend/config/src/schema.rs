use std::collections::HashMap;

use thiserror::Error;

/// Model used when `LEAFSCAN_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Error returned for missing or malformed configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var \"{0}\"")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: \"{value}\"")]
    InvalidValue { var: &'static str, value: String },
}

/// Leafscan runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Gemini API key (required)
    pub gemini_api_key: String,
    /// Gemini model id
    pub gemini_model: String,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// `GOOGLE_GEMINI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let gemini_api_key = match vars.get("GOOGLE_GEMINI_API_KEY") {
            Some(v) if !v.is_empty() => v.clone(),
            _ => return Err(ConfigError::MissingVar("GOOGLE_GEMINI_API_KEY")),
        };

        let port = match vars.get("LEAFSCAN_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "LEAFSCAN_PORT",
                value: raw.clone(),
            })?,
            None => 8080,
        };

        Ok(Self {
            bind_address: vars
                .get("LEAFSCAN_BIND")
                .cloned()
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            gemini_api_key,
            gemini_model: vars
                .get("LEAFSCAN_MODEL")
                .cloned()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            log_level: vars
                .get("RUST_LOG")
                .cloned()
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}
