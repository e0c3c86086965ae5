//! Inbound request as seen by a handler

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use validator::Validate;

use super::AppError;

/// Raw request handed to a handler: an optional body and the matched path parameters
#[derive(Debug, Clone, Default)]
pub struct CoffeeRequest {
    body: Option<String>,
    path_parameters: HashMap<String, String>,
}

impl CoffeeRequest {
    /// Creates a request from its body and path parameters
    #[must_use]
    pub const fn new(body: Option<String>, path_parameters: HashMap<String, String>) -> Self {
        Self {
            body,
            path_parameters,
        }
    }

    /// Request with only a JSON body
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(Some(body.into()), HashMap::new())
    }

    /// Request addressed to a single coffee
    #[must_use]
    pub fn for_id(id: impl Into<String>, body: Option<String>) -> Self {
        Self::new(body, HashMap::from([("id".to_string(), id.into())]))
    }

    /// Returns a non-empty path parameter
    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns the `id` path parameter or a validation error
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the parameter is missing or empty
    pub fn required_id(&self) -> Result<&str, AppError> {
        self.path_parameter("id")
            .ok_or_else(|| AppError::Validation("Missing required Id field".to_string()))
    }

    /// Parses and validates the JSON body
    ///
    /// A missing or blank body is parsed as `{}`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the body is not valid JSON for `T`
    /// or violates its field constraints
    pub fn json_body<T>(&self) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let body = self
            .body
            .as_deref()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or("{}");

        let payload: T = serde_json::from_str(body).map_err(|err| {
            tracing::debug!("Rejected request body: {err}");
            AppError::Validation("Invalid JSON payload".to_string())
        })?;

        payload.validate()?;

        Ok(payload)
    }
}
