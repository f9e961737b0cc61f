//! Core error types for slotpick-core.
//!
//! This module defines the error hierarchy using thiserror. The selection
//! engine itself never fails -- it degrades to shorter output -- so these
//! types cover the edges of the system: configuration, providers, and
//! slot construction.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slotpick-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Provider-related errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Provider-specific errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent or the transport failed
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Provider API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The availability payload did not match the expected shape
    #[error("Malformed availability response: {0}")]
    MalformedResponse(String),

    /// The endpoint URL could not be built
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
