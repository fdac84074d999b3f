//! Domain error types for grouppick
//!
//! Provides structured error types for different domains:
//! - `GroupError` for loading and submitting groups
//! - `AppError` for startup failures (config, HTTP client)

use thiserror::Error;

/// Startup error type for grouppick
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Errors surfaced inline by the group picker screen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("Failed to load groups: {0}")]
    LoadFailed(String),

    #[error("Failed to submit groups: {0}")]
    SubmitFailed(String),

    #[error("Select at least one group before submitting")]
    EmptySelection,
}

/// Result type alias for GroupError
pub type GroupResult<T> = std::result::Result<T, GroupError>;

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
