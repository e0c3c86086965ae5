//! Storage for the coffee catalog
//!
//! Provides the `CoffeeStore` abstraction used by the request handlers, its
//! `DynamoDB` implementation and, with the `test-utils` feature, an in-memory one.

pub mod coffee;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod store;

pub use coffee::{CoffeeAttribute, CoffeeStorage, CoffeeStorageError, CoffeeStorageResult};
pub use store::CoffeeStore;
