//! Uniform JSON response envelope

use std::collections::BTreeMap;

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use common_types::{ApiErrorBody, ApiMessage};
use serde::Serialize;

/// Status code, headers and serialized body of a handler response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers, always including `Content-Type: application/json`
    pub headers: BTreeMap<String, String>,
    /// JSON body, or the empty string when there is none
    pub body: String,
}

impl ResponseEnvelope {
    /// Status code as a `StatusCode`
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Builds an envelope from a status code and an optional body
///
/// Never fails: a body that cannot be serialized is logged and sent empty.
#[must_use]
pub fn build<T>(status: StatusCode, body: Option<&T>) -> ResponseEnvelope
where
    T: Serialize + ?Sized,
{
    let body = body
        .map(|body| {
            serde_json::to_string(body).unwrap_or_else(|err| {
                tracing::error!("Failed to serialize response body: {err}");
                String::new()
            })
        })
        .unwrap_or_default();

    ResponseEnvelope {
        status_code: status.as_u16(),
        headers: BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]),
        body,
    }
}

/// `{ "message": ..., "response": ... }` envelope
#[must_use]
pub fn success<T: Serialize>(status: StatusCode, message: &str, response: T) -> ResponseEnvelope {
    build(
        status,
        Some(&ApiMessage {
            message: message.to_string(),
            response,
        }),
    )
}

/// `{ "error": ... }` envelope
#[must_use]
pub fn error(status: StatusCode, message: &str) -> ResponseEnvelope {
    build(
        status,
        Some(&ApiErrorBody {
            error: message.to_string(),
        }),
    )
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, self.body).into_response();

        for (name, value) in &self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header {name}"),
            }
        }

        response
    }
}
