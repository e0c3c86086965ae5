//! HTTP client for the coffee catalog routes

use std::sync::Arc;
use std::time::Duration;

use common_types::{ApiErrorBody, ApiMessage, Coffee, CoffeeChanges, NewCoffee};
use reqwest::{header, Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::credentials::CredentialProvider;
use crate::error::{ClientError, ClientResult};

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Client for `/coffees`
///
/// No request is retried; callers decide their own retry policy.
pub struct CoffeeApiClient {
    base_url: Url,
    http_client: Client,
    credentials: Arc<dyn CredentialProvider>,
}

impl CoffeeApiClient {
    /// Creates a new client for the API rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if `base_url` is not an absolute
    /// http(s) URL, or `ClientError::Http` if the HTTP client cannot be built
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialProvider>) -> ClientResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
            credentials,
        })
    }

    /// Lists every coffee
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the API answers with an error
    pub async fn list_coffees(&self) -> ClientResult<Vec<Coffee>> {
        self.send(self.request(Method::GET, &[])?).await
    }

    /// Gets a single coffee
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the coffee does not exist
    pub async fn get_coffee(&self, id: &str) -> ClientResult<Coffee> {
        self.send(self.request(Method::GET, &[id])?).await
    }

    /// Creates a coffee
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 409 if the id is already taken
    pub async fn create_coffee(&self, coffee: &NewCoffee) -> ClientResult<Coffee> {
        self.send(self.request(Method::POST, &[])?.json(coffee)).await
    }

    /// Updates the fields present in `changes`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the coffee does not exist
    pub async fn update_coffee(&self, id: &str, changes: &CoffeeChanges) -> ClientResult<Coffee> {
        self.send(self.request(Method::PUT, &[id])?.json(changes))
            .await
    }

    /// Deletes a coffee, returning it as it was before deletion
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the coffee does not exist
    pub async fn delete_coffee(&self, id: &str) -> ClientResult<Coffee> {
        self.send(self.request(Method::DELETE, &[id])?).await
    }

    fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("coffees")
            .extend(segments);

        let mut request = self
            .http_client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.credentials.current_token() {
            request = request.bearer_auth(token);
        }

        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.json::<ApiMessage<T>>().await?;
            return Ok(body.response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("Access token rejected, clearing credentials");
            self.credentials.clear_token();
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .map_or_else(|_| status.to_string(), |body| body.error);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
