//! In-memory `CoffeeStore` with the same conditional semantics as the `DynamoDB` table

use std::collections::HashMap;

use async_trait::async_trait;
use common_types::{Coffee, CoffeeChanges};
use tokio::sync::Mutex;

use crate::{
    coffee::{CoffeeStorageError, CoffeeStorageResult},
    store::CoffeeStore,
};

/// Coffee store backed by a `HashMap`
///
/// A single mutex is held for the whole of each operation, which makes every
/// check-then-write atomic.
#[derive(Debug, Default)]
pub struct MemoryCoffeeStore {
    coffees: Mutex<HashMap<String, Coffee>>,
}

impl MemoryCoffeeStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `coffees`
    #[must_use]
    pub fn with_coffees(coffees: impl IntoIterator<Item = Coffee>) -> Self {
        Self {
            coffees: Mutex::new(
                coffees
                    .into_iter()
                    .map(|coffee| (coffee.coffee_id.clone(), coffee))
                    .collect(),
            ),
        }
    }

    /// Number of stored coffees
    pub async fn len(&self) -> usize {
        self.coffees.lock().await.len()
    }

    /// Whether the store holds no coffees
    pub async fn is_empty(&self) -> bool {
        self.coffees.lock().await.is_empty()
    }
}

#[async_trait]
impl CoffeeStore for MemoryCoffeeStore {
    async fn create(&self, coffee: &Coffee) -> CoffeeStorageResult<()> {
        let mut coffees = self.coffees.lock().await;
        if coffees.contains_key(&coffee.coffee_id) {
            return Err(CoffeeStorageError::CoffeeExists);
        }
        coffees.insert(coffee.coffee_id.clone(), coffee.clone());
        Ok(())
    }

    async fn update(
        &self,
        coffee_id: &str,
        changes: &CoffeeChanges,
    ) -> CoffeeStorageResult<Coffee> {
        if changes.name.is_none() && changes.price.is_none() && changes.available.is_none() {
            return Err(CoffeeStorageError::NoChanges);
        }

        let mut coffees = self.coffees.lock().await;
        let coffee = coffees
            .get_mut(coffee_id)
            .ok_or(CoffeeStorageError::CoffeeNotFound)?;

        if let Some(name) = &changes.name {
            coffee.name.clone_from(name);
        }
        if let Some(price) = changes.price {
            coffee.price = price;
        }
        if let Some(available) = changes.available {
            coffee.available = available;
        }

        Ok(coffee.clone())
    }

    async fn delete(&self, coffee_id: &str) -> CoffeeStorageResult<Coffee> {
        self.coffees
            .lock()
            .await
            .remove(coffee_id)
            .ok_or(CoffeeStorageError::CoffeeNotFound)
    }

    async fn get_one(&self, coffee_id: &str) -> CoffeeStorageResult<Option<Coffee>> {
        Ok(self.coffees.lock().await.get(coffee_id).cloned())
    }

    async fn list(&self) -> CoffeeStorageResult<Vec<Coffee>> {
        let mut coffees: Vec<Coffee> = self.coffees.lock().await.values().cloned().collect();
        coffees.sort_by(|a, b| a.coffee_id.cmp(&b.coffee_id));
        Ok(coffees)
    }
}
