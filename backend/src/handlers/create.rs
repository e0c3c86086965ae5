//! `POST /coffees`

use axum::http::StatusCode;
use coffee_storage::CoffeeStore;
use common_types::Coffee;
use serde::Deserialize;
use validator::Validate;

use super::response::{self, ResponseEnvelope};
use super::validate_price;
use crate::types::{AppError, CoffeeRequest};

/// Body of a create request
///
/// Every field is optional here so that absence is reported as a validation
/// error instead of a JSON parse failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoffeeRequest {
    /// Primary key of the new coffee
    #[validate(length(min = 1))]
    pub coffee_id: Option<String>,
    /// Display name
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// Price, zero or a positive number the table can store
    #[validate(custom(function = "validate_price"))]
    pub price: Option<f64>,
    /// Availability, `false` is a valid value
    pub available: Option<bool>,
}

impl TryFrom<CreateCoffeeRequest> for Coffee {
    type Error = AppError;

    fn try_from(request: CreateCoffeeRequest) -> Result<Self, Self::Error> {
        let (Some(coffee_id), Some(name), Some(price), Some(available)) = (
            request.coffee_id,
            request.name,
            request.price,
            request.available,
        ) else {
            return Err(AppError::Validation(
                "Missing required fields".to_string(),
            ));
        };

        Ok(Self {
            coffee_id,
            name,
            price,
            available,
        })
    }
}

/// Creates a coffee, refusing to overwrite an existing id
///
/// # Returns
///
/// - `201 CREATED` with the stored item
/// - `400 BAD_REQUEST` if a field is missing or invalid
/// - `409 CONFLICT` if the id already exists
/// - `500 INTERNAL_SERVER_ERROR` on any other store failure
pub async fn create_coffee(store: &dyn CoffeeStore, request: &CoffeeRequest) -> ResponseEnvelope {
    match try_create(store, request).await {
        Ok(coffee) => {
            tracing::info!(coffee_id = %coffee.coffee_id, "Created coffee");
            response::success(StatusCode::CREATED, "Item created successfully", coffee)
        }
        Err(err) => err.into_envelope(),
    }
}

async fn try_create(store: &dyn CoffeeStore, request: &CoffeeRequest) -> Result<Coffee, AppError> {
    let coffee = Coffee::try_from(request.json_body::<CreateCoffeeRequest>()?)?;

    store.create(&coffee).await?;

    Ok(coffee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_storage::memory::MemoryCoffeeStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body(value: &serde_json::Value) -> CoffeeRequest {
        CoffeeRequest::with_body(value.to_string())
    }

    #[tokio::test]
    async fn test_create_stores_exact_item() {
        let store = MemoryCoffeeStore::new();
        let request = body(&json!({
            "coffeeId": "cortado",
            "name": "Cortado",
            "price": 3.5,
            "available": true
        }));

        let envelope = create_coffee(&store, &request).await;

        assert_eq!(envelope.status_code, 201);
        let expected = Coffee {
            coffee_id: "cortado".to_string(),
            name: "Cortado".to_string(),
            price: 3.5,
            available: true,
        };
        assert_eq!(store.get_one("cortado").await.unwrap(), Some(expected.clone()));

        let body: serde_json::Value = serde_json::from_str(&envelope.body).unwrap();
        assert_eq!(body["message"], "Item created successfully");
        assert_eq!(body["response"], serde_json::to_value(expected).unwrap());
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let store = MemoryCoffeeStore::new();
        let request = body(&json!({
            "coffeeId": "mocha",
            "name": "Mocha",
            "price": 4.25,
            "available": true
        }));

        assert_eq!(create_coffee(&store, &request).await.status_code, 201);

        let second = create_coffee(&store, &request).await;
        assert_eq!(second.status_code, 409);
        assert_eq!(
            second.body,
            r#"{"error":"Item with the same coffeeId already exists"}"#
        );
    }

    #[tokio::test]
    async fn test_available_false_is_accepted() {
        let store = MemoryCoffeeStore::new();
        let request = body(&json!({
            "coffeeId": "decaf",
            "name": "Decaf",
            "price": 2,
            "available": false
        }));

        let envelope = create_coffee(&store, &request).await;

        assert_eq!(envelope.status_code, 201);
        assert!(!store.get_one("decaf").await.unwrap().unwrap().available);
    }

    #[tokio::test]
    async fn test_missing_or_invalid_fields_are_rejected_without_mutation() {
        let store = MemoryCoffeeStore::new();
        let cases = [
            json!({ "coffeeId": "a", "name": "A", "available": true }),
            json!({ "name": "A", "price": 1, "available": true }),
            json!({ "coffeeId": "a", "price": 1, "available": true }),
            json!({ "coffeeId": "a", "name": "A", "price": 1 }),
            json!({ "coffeeId": "a", "name": "A", "price": 1, "available": null }),
            json!({ "coffeeId": "", "name": "A", "price": 1, "available": true }),
            json!({ "coffeeId": "a", "name": "A", "price": -1, "available": true }),
            json!({ "coffeeId": "a", "name": "A", "price": "free", "available": true }),
        ];

        for case in cases {
            let envelope = create_coffee(&store, &body(&case)).await;
            assert_eq!(envelope.status_code, 400, "case: {case}");
        }

        assert_eq!(
            create_coffee(&store, &CoffeeRequest::default()).await.status_code,
            400
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unstorable_price_is_bad_request() {
        let store = MemoryCoffeeStore::new();

        for price in [1e200, 1e-200] {
            let request = body(&json!({
                "coffeeId": "gold",
                "name": "Gold Leaf Latte",
                "price": price,
                "available": true
            }));

            let envelope = create_coffee(&store, &request).await;

            assert_eq!(envelope.status_code, 400, "price: {price}");
            assert_eq!(envelope.body, r#"{"error":"Invalid fields: price"}"#);
        }

        assert!(store.is_empty().await);
    }
}
