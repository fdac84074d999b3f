//! Shared HTTP client for the list and submit endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::error::AppError;

/// Build the client shared by the loader and the submit action.
///
/// Timeouts are applied per request so each call can report its own budget.
pub fn build_client() -> Result<Client, AppError> {
    Client::builder()
        .user_agent(concat!("grouppick/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Other(format!("failed to build http client: {}", e)))
}

/// Human-readable reason for a transport failure
pub fn describe_error(err: &reqwest::Error, timeout: Duration) -> String {
    if err.is_timeout() {
        format!("request timed out after {}ms", timeout.as_millis())
    } else if err.is_connect() {
        format!("could not connect: {}", err)
    } else {
        err.to_string()
    }
}
