//! Extractors that reject with the `{ "error": ... }` envelope

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};

use crate::types::error::AppError;

/// Raw request body, `None` when empty
///
/// Bodies that are not UTF-8 cannot be JSON and are rejected as such, so a
/// key is never stored with replacement characters.
pub struct CoffeeBody(pub Option<String>);

impl<S> FromRequest<S> for CoffeeBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::Validation(err.body_text()))?;

        if bytes.is_empty() {
            return Ok(Self(None));
        }

        let body = String::from_utf8(bytes.to_vec()).map_err(|err| {
            tracing::debug!("Rejected request body: {err}");
            AppError::Validation("Invalid JSON payload".to_string())
        })?;

        Ok(Self(Some(body)))
    }
}

/// Matched path parameters
pub struct CoffeePath(pub HashMap<String, String>);

impl<S> FromRequestParts<S> for CoffeePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::Validation(err.body_text()))?;

        Ok(Self(params))
    }
}
