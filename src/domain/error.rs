//! Domain error types

use thiserror::Error;

/// Error when an injected date cannot be parsed
#[derive(Debug, Clone, Error)]
#[error("Invalid date: \"{input}\". Expected format: YYYY-MM-DD (e.g., 2025-11-02)")]
pub struct InvalidDateError {
    pub input: String,
}

/// Error when a config value is not one of the accepted choices
#[derive(Debug, Clone, Error)]
#[error("Invalid value for '{key}': \"{input}\". Valid values are: {valid}")]
pub struct InvalidSettingError {
    pub key: &'static str,
    pub input: String,
    pub valid: &'static str,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
