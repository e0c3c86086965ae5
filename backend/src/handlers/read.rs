//! `GET /coffees` and `GET /coffees/{id}`

use axum::http::StatusCode;
use coffee_storage::CoffeeStore;
use common_types::Coffee;

use super::response::{self, ResponseEnvelope};
use crate::types::{AppError, CoffeeRequest};

/// Lists the whole catalog
pub async fn list_coffees(store: &dyn CoffeeStore) -> ResponseEnvelope {
    match store.list().await {
        Ok(coffees) => response::success(StatusCode::OK, "Items retrieved successfully", coffees),
        Err(err) => AppError::from(err).into_envelope(),
    }
}

/// Gets a single coffee, `404 NOT_FOUND` if it does not exist
pub async fn get_coffee(store: &dyn CoffeeStore, request: &CoffeeRequest) -> ResponseEnvelope {
    match try_get(store, request).await {
        Ok(coffee) => response::success(StatusCode::OK, "Item retrieved successfully", coffee),
        Err(err) => err.into_envelope(),
    }
}

async fn try_get(store: &dyn CoffeeStore, request: &CoffeeRequest) -> Result<Coffee, AppError> {
    let id = request.required_id()?;

    store.get_one(id).await?.ok_or(AppError::NotFound)
}
