//! Error types for the coffee API client

use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by `CoffeeApiClient`
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport failure or undecodable response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The `error` field of the response body, or the status text
        message: String,
    },
}

impl ClientError {
    /// HTTP status of an API error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
