//! Wire types shared between the coffee backend and its API client

use serde::{Deserialize, Serialize};

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coffee {
    /// Primary key, immutable once created
    pub coffee_id: String,
    /// Display name
    pub name: String,
    /// Price, unit and currency are not interpreted
    pub price: f64,
    /// Whether the coffee can currently be ordered
    pub available: bool,
}

/// Payload for `POST /coffees`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoffee {
    pub coffee_id: String,
    pub name: String,
    pub price: f64,
    pub available: bool,
}

impl From<NewCoffee> for Coffee {
    fn from(new: NewCoffee) -> Self {
        Self {
            coffee_id: new.coffee_id,
            name: new.name,
            price: new.price,
            available: new.available,
        }
    }
}

/// Payload for `PUT /coffees/{id}`
///
/// Absent fields are left untouched by the update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Success body: a human-readable message plus the affected item(s)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage<T> {
    pub message: String,
    pub response: T,
}

/// Error body returned with every non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
