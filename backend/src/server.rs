use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Extension, Router,
};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;

use crate::routes::{self, coffees::SharedStore};
use crate::types::{AppError, Environment};

/// Requests still running after this long are answered with `408`
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the application router with its dependencies attached
pub fn router(environment: Environment, store: SharedStore) -> Router {
    routes::handler()
        .layer(Extension(environment))
        .layer(Extension(store))
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default())
        .layer(tower_http::timeout::TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(middleware::map_response(timeout_envelope))
}

/// Gives the empty `408` from the timeout layer the JSON error body
#[allow(clippy::unused_async)]
async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }

    response
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: Environment, store: SharedStore) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], environment.port()?));

    let router = router(environment, store);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("☕ Coffee catalog backend started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
