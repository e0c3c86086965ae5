//! Error taxonomy shared by every handler

use aws_sdk_dynamodb::error::DisplayErrorContext;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coffee_storage::CoffeeStorageError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::handlers::response::{self, ResponseEnvelope};

/// Handler error, converted to a response envelope at the handler boundary
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Missing or malformed bearer credential
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Create on an id that already exists
    #[error("Item with the same coffeeId already exists")]
    Conflict,

    /// Update or delete on an id that does not exist
    #[error("Item not found")]
    NotFound,

    /// Request did not complete within the server timeout
    #[error("Request timed out")]
    Timeout,

    /// Any other store failure, message passed through verbatim
    #[error("{0}")]
    Store(String),
}

impl AppError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the error and builds its `{ "error": ... }` envelope
    #[must_use]
    pub fn into_envelope(self) -> ResponseEnvelope {
        let status = self.status();

        match status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", status, self),
            500..=599 => tracing::error!("Server error: {} - {}", status, self),
            _ => {}
        }

        response::error(status, &self.to_string())
    }
}

impl From<CoffeeStorageError> for AppError {
    fn from(err: CoffeeStorageError) -> Self {
        match err {
            CoffeeStorageError::CoffeeExists => Self::Conflict,
            CoffeeStorageError::CoffeeNotFound => Self::NotFound,
            CoffeeStorageError::NoChanges => {
                Self::Validation("Missing required fields in body".to_string())
            }
            other => Self::Store(DisplayErrorContext(&other).to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();

        Self::Validation(format!("Invalid fields: {}", fields.join(", ")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}
