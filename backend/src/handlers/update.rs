//! `PUT /coffees/{id}`

use axum::http::StatusCode;
use coffee_storage::CoffeeStore;
use common_types::{Coffee, CoffeeChanges};
use serde::Deserialize;
use validator::Validate;

use super::response::{self, ResponseEnvelope};
use super::validate_price;
use crate::types::{AppError, CoffeeRequest};

/// Body of an update request, every field optional
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoffeeRequest {
    /// New display name
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// New price, zero or a positive number the table can store
    #[validate(custom(function = "validate_price"))]
    pub price: Option<f64>,
    /// New availability
    pub available: Option<bool>,
}

impl UpdateCoffeeRequest {
    /// Keeps the fields that are present, failing if there are none
    fn into_changes(self) -> Result<CoffeeChanges, AppError> {
        if self.name.is_none() && self.price.is_none() && self.available.is_none() {
            return Err(AppError::Validation(
                "Missing required fields in body".to_string(),
            ));
        }

        Ok(CoffeeChanges {
            name: self.name,
            price: self.price,
            available: self.available,
        })
    }
}

/// Updates the fields present in the body, leaving the others untouched
///
/// # Returns
///
/// - `200 OK` with the full updated item
/// - `400 BAD_REQUEST` if the id is missing or the body has no valid field
/// - `404 NOT_FOUND` if the id does not exist
/// - `500 INTERNAL_SERVER_ERROR` on any other store failure
pub async fn update_coffee(store: &dyn CoffeeStore, request: &CoffeeRequest) -> ResponseEnvelope {
    match try_update(store, request).await {
        Ok(coffee) => {
            tracing::info!(coffee_id = %coffee.coffee_id, "Updated coffee");
            response::success(StatusCode::OK, "Item updated successfully", coffee)
        }
        Err(err) => err.into_envelope(),
    }
}

async fn try_update(store: &dyn CoffeeStore, request: &CoffeeRequest) -> Result<Coffee, AppError> {
    let id = request.required_id()?;
    let changes = request.json_body::<UpdateCoffeeRequest>()?.into_changes()?;

    Ok(store.update(id, &changes).await?)
}
