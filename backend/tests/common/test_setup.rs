use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use coffee_backend::{routes::coffees::SharedStore, server, types::Environment};
use coffee_storage::{memory::MemoryCoffeeStore, CoffeeStorageError, CoffeeStorageResult, CoffeeStore};
use common_types::{Coffee, CoffeeChanges};
use http::Method;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Bearer header accepted by the auth middleware
pub const TEST_TOKEN: &str = "Bearer test-access-token";

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router backed by an in-memory store
pub struct TestSetup {
    pub router: Router,
    pub store: Arc<MemoryCoffeeStore>,
}

impl TestSetup {
    /// Auth enabled, empty catalog
    pub fn new() -> Self {
        Self::with_environment(Environment::Production, MemoryCoffeeStore::new())
    }

    /// Auth enabled, pre-populated catalog
    pub fn with_coffees(coffees: impl IntoIterator<Item = Coffee>) -> Self {
        Self::with_environment(
            Environment::Production,
            MemoryCoffeeStore::with_coffees(coffees),
        )
    }

    pub fn with_environment(environment: Environment, store: MemoryCoffeeStore) -> Self {
        setup_test_env();

        let store = Arc::new(store);
        let shared: SharedStore = store.clone();
        let router = server::router(environment, shared);

        Self { router, store }
    }

    /// Sends a request with the test bearer token
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_request(method, uri, body, Some(vec![("Authorization", TEST_TOKEN)]))
            .await
    }

    pub async fn send_request(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
        headers: Option<Vec<(&str, &str)>>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let mut builder = Request::builder()
            .uri(uri)
            .method(method)
            .header("Content-Type", "application/json");

        for (name, value) in headers.unwrap_or_default() {
            builder = builder.header(name, value);
        }

        let body = body.map_or_else(Body::empty, |json| Body::from(json.to_string()));
        let request = builder.body(body)?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

/// Sends any body with the test bearer token to `router`
pub async fn send_with_token(
    router: &Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> Response {
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .header("Content-Type", "application/json")
        .header("Authorization", TEST_TOKEN)
        .body(body.into())
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Store whose every operation fails like an unreachable backend
pub struct FailingStore;

#[async_trait]
impl CoffeeStore for FailingStore {
    async fn create(&self, _coffee: &Coffee) -> CoffeeStorageResult<()> {
        Err(failure())
    }

    async fn update(&self, _coffee_id: &str, _changes: &CoffeeChanges) -> CoffeeStorageResult<Coffee> {
        Err(failure())
    }

    async fn delete(&self, _coffee_id: &str) -> CoffeeStorageResult<Coffee> {
        Err(failure())
    }

    async fn get_one(&self, _coffee_id: &str) -> CoffeeStorageResult<Option<Coffee>> {
        Err(failure())
    }

    async fn list(&self) -> CoffeeStorageResult<Vec<Coffee>> {
        Err(failure())
    }
}

fn failure() -> CoffeeStorageError {
    CoffeeStorageError::SerializationError("backend unavailable".to_string())
}

/// Router backed by `FailingStore`
pub fn failing_router() -> Router {
    setup_test_env();
    let store: SharedStore = Arc::new(FailingStore);
    server::router(Environment::Production, store)
}

/// Store that takes longer than the request timeout to answer
pub struct SlowStore;

#[async_trait]
impl CoffeeStore for SlowStore {
    async fn create(&self, _coffee: &Coffee) -> CoffeeStorageResult<()> {
        stall().await;
        Ok(())
    }

    async fn update(&self, _coffee_id: &str, _changes: &CoffeeChanges) -> CoffeeStorageResult<Coffee> {
        stall().await;
        Err(CoffeeStorageError::CoffeeNotFound)
    }

    async fn delete(&self, _coffee_id: &str) -> CoffeeStorageResult<Coffee> {
        stall().await;
        Err(CoffeeStorageError::CoffeeNotFound)
    }

    async fn get_one(&self, _coffee_id: &str) -> CoffeeStorageResult<Option<Coffee>> {
        stall().await;
        Ok(None)
    }

    async fn list(&self) -> CoffeeStorageResult<Vec<Coffee>> {
        stall().await;
        Ok(Vec::new())
    }
}

async fn stall() {
    tokio::time::sleep(server::REQUEST_TIMEOUT * 12).await;
}

/// Router backed by `SlowStore`
pub fn slow_router() -> Router {
    setup_test_env();
    let store: SharedStore = Arc::new(SlowStore);
    server::router(Environment::Production, store)
}
