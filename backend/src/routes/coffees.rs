//! Adapters from axum extractors to the catalog handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::Extension;
use coffee_storage::CoffeeStore;

use crate::{
    handlers::{self, ResponseEnvelope},
    types::{CoffeeBody, CoffeePath, CoffeeRequest},
};

/// Shared store handle injected into every route
pub type SharedStore = Arc<dyn CoffeeStore>;

/// `POST /coffees`
pub async fn create(
    Extension(store): Extension<SharedStore>,
    CoffeeBody(body): CoffeeBody,
) -> ResponseEnvelope {
    let request = CoffeeRequest::new(body, HashMap::new());
    handlers::create_coffee(store.as_ref(), &request).await
}

/// `GET /coffees`
pub async fn list(Extension(store): Extension<SharedStore>) -> ResponseEnvelope {
    handlers::list_coffees(store.as_ref()).await
}

/// `GET /coffees/{id}`
pub async fn get(
    Extension(store): Extension<SharedStore>,
    CoffeePath(params): CoffeePath,
) -> ResponseEnvelope {
    let request = CoffeeRequest::new(None, params);
    handlers::get_coffee(store.as_ref(), &request).await
}

/// `PUT /coffees/{id}`
pub async fn update(
    Extension(store): Extension<SharedStore>,
    CoffeePath(params): CoffeePath,
    CoffeeBody(body): CoffeeBody,
) -> ResponseEnvelope {
    let request = CoffeeRequest::new(body, params);
    handlers::update_coffee(store.as_ref(), &request).await
}

/// `DELETE /coffees/{id}`
pub async fn delete(
    Extension(store): Extension<SharedStore>,
    CoffeePath(params): CoffeePath,
) -> ResponseEnvelope {
    let request = CoffeeRequest::new(None, params);
    handlers::delete_coffee(store.as_ref(), &request).await
}
