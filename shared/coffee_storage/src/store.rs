//! Store abstraction the request handlers are written against

use async_trait::async_trait;
use common_types::{Coffee, CoffeeChanges};

use crate::coffee::CoffeeStorageResult;

/// Conditional key-value store for coffees, keyed by `coffee_id`
///
/// Implementations must make each write atomic and enforce the key-existence
/// precondition themselves: handlers hold no locks.
#[async_trait]
pub trait CoffeeStore: Send + Sync {
    /// Inserts `coffee` only if no coffee with the same id exists
    ///
    /// # Errors
    ///
    /// Returns `CoffeeStorageError::CoffeeExists` if the id is taken, or another
    /// `CoffeeStorageError` if the backend fails
    async fn create(&self, coffee: &Coffee) -> CoffeeStorageResult<()>;

    /// Applies the present fields of `changes` to an existing coffee and returns the updated item
    ///
    /// # Errors
    ///
    /// Returns `CoffeeStorageError::CoffeeNotFound` if the id does not exist,
    /// `CoffeeStorageError::NoChanges` if `changes` is empty, or another
    /// `CoffeeStorageError` if the backend fails
    async fn update(&self, coffee_id: &str, changes: &CoffeeChanges)
        -> CoffeeStorageResult<Coffee>;

    /// Deletes an existing coffee and returns the item as it was before deletion
    ///
    /// # Errors
    ///
    /// Returns `CoffeeStorageError::CoffeeNotFound` if the id does not exist, or another
    /// `CoffeeStorageError` if the backend fails
    async fn delete(&self, coffee_id: &str) -> CoffeeStorageResult<Coffee>;

    /// Gets a single coffee by id
    ///
    /// # Errors
    ///
    /// Returns `CoffeeStorageError` if the backend fails
    async fn get_one(&self, coffee_id: &str) -> CoffeeStorageResult<Option<Coffee>>;

    /// Lists every coffee in the catalog
    ///
    /// # Errors
    ///
    /// Returns `CoffeeStorageError` if the backend fails
    async fn list(&self) -> CoffeeStorageResult<Vec<Coffee>>;
}
