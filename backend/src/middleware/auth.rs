//! Bearer credential gate for catalog routes

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::types::{AppError, Environment};

/// Extracts the token from an `Authorization: Bearer <token>` header value
fn parse_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Bearer credential middleware
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Returns 401 for missing or malformed headers
///
/// Token signatures are verified by the identity provider's authorizer in front of
/// this service, so only the presence of a well-formed credential is checked here.
///
/// In development, set `DISABLE_AUTH=true` to let requests through without a token.
///
/// # Errors
///
/// - `AppError::Unauthorized` - Missing or malformed token
pub async fn auth_middleware(
    Extension(environment): Extension<Environment>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let has_token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(parse_bearer)
        .is_some();

    if !has_token {
        if !environment.disable_auth() {
            return Err(AppError::Unauthorized(
                "Authorization header must contain a valid Bearer token",
            ));
        }
        tracing::debug!("Auth disabled, accepting request without bearer token");
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer() {
        assert_eq!(parse_bearer("Bearer abc.def"), Some("abc.def"));
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer("abc.def"), None);
    }
}
