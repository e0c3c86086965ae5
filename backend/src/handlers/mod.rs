//! Request handlers
//!
//! Each handler is stateless: it validates one request, issues at most one
//! store operation and always answers with a `ResponseEnvelope`.

pub mod create;
pub mod delete;
pub mod read;
pub mod response;
pub mod update;

pub use create::create_coffee;
pub use delete::delete_coffee;
pub use read::{get_coffee, list_coffees};
pub use response::ResponseEnvelope;
pub use update::update_coffee;

use std::borrow::Cow;

use validator::ValidationError;

/// Smallest non-zero magnitude a `DynamoDB` number can hold
const MIN_STORABLE_PRICE: f64 = 1e-130;
/// Prices at or above this cannot be stored as a `DynamoDB` number
const MAX_STORABLE_PRICE: f64 = 1e126;

/// Prices must be zero or a positive number the table can store
fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price == 0.0 || (MIN_STORABLE_PRICE..MAX_STORABLE_PRICE).contains(&price) {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_price");
    error.message = Some(Cow::Borrowed(
        "Price must be zero or between 1e-130 and 1e126",
    ));
    Err(error)
}
