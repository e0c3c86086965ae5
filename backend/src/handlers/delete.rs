//! `DELETE /coffees/{id}`

use axum::http::StatusCode;
use coffee_storage::CoffeeStore;
use common_types::Coffee;

use super::response::{self, ResponseEnvelope};
use crate::types::{AppError, CoffeeRequest};

/// Deletes a coffee and returns it as it was before deletion
///
/// # Returns
///
/// - `200 OK` with the deleted item
/// - `400 BAD_REQUEST` if the id is missing
/// - `404 NOT_FOUND` if the id does not exist
/// - `500 INTERNAL_SERVER_ERROR` on any other store failure
pub async fn delete_coffee(store: &dyn CoffeeStore, request: &CoffeeRequest) -> ResponseEnvelope {
    match try_delete(store, request).await {
        Ok(coffee) => {
            tracing::info!(coffee_id = %coffee.coffee_id, "Deleted coffee");
            response::success(StatusCode::OK, "Item deleted successfully", coffee)
        }
        Err(err) => err.into_envelope(),
    }
}

async fn try_delete(store: &dyn CoffeeStore, request: &CoffeeRequest) -> Result<Coffee, AppError> {
    let id = request.required_id()?;

    Ok(store.delete(id).await?)
}
