//! Upstream failures
//!
//! Unlike missing payload data, these always reach the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP {code}: {}", .cause.as_deref().unwrap_or("no cause given"))]
    Status { code: u16, cause: Option<String> },
    #[error("resource not found")]
    NotFound,
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("API Error: {cause}")]
    Api { cause: String },
    #[error("no API key configured (set {})", crate::config::API_KEY_ENV)]
    MissingApiKey,
    #[error("response is missing '{0}'")]
    MissingField(&'static str),
}
