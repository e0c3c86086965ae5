//! Coffee catalog storage module for `DynamoDB` operations
//!
//! Every write is guarded by a condition on key existence, so concurrent writers
//! on the same `coffeeId` are serialized by `DynamoDB` itself.

mod error;
pub mod expression;

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::SdkError,
    types::{AttributeValue, ReturnValue},
    Client as DynamoDbClient,
};
use common_types::{Coffee, CoffeeChanges};
pub use error::{CoffeeStorageError, CoffeeStorageResult};
use serde_dynamo::{from_item, from_items, to_item};
use strum::Display;

use crate::store::CoffeeStore;
use expression::{assignments, UpdateExpression};

/// `DynamoDB` attribute names for the coffee table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CoffeeAttribute {
    /// Primary key
    CoffeeId,
    /// Display name, a `DynamoDB` reserved word
    Name,
    /// Price
    Price,
    /// Availability flag
    Available,
}

/// Storage client for the coffee catalog table
pub struct CoffeeStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl CoffeeStorage {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for the catalog
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    fn key(coffee_id: &str) -> (String, AttributeValue) {
        (
            CoffeeAttribute::CoffeeId.to_string(),
            AttributeValue::S(coffee_id.to_string()),
        )
    }
}

#[async_trait]
impl CoffeeStore for CoffeeStorage {
    /// Inserts a coffee, failing if one with the same id already exists
    async fn create(&self, coffee: &Coffee) -> CoffeeStorageResult<()> {
        let item = to_item(coffee)?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", CoffeeAttribute::CoffeeId.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    CoffeeStorageError::CoffeeExists
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    async fn update(
        &self,
        coffee_id: &str,
        changes: &CoffeeChanges,
    ) -> CoffeeStorageResult<Coffee> {
        let UpdateExpression {
            expression,
            mut names,
            values,
        } = UpdateExpression::from_assignments(assignments(changes))
            .ok_or(CoffeeStorageError::NoChanges)?;
        names.insert("#pk".to_string(), CoffeeAttribute::CoffeeId.to_string());

        let (key_name, key_value) = Self::key(coffee_id);

        let response = self
            .dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .update_expression(expression)
            .condition_expression("attribute_exists(#pk)")
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    CoffeeStorageError::CoffeeNotFound
                } else {
                    err.into()
                }
            })?;

        let attributes = response.attributes.ok_or_else(|| {
            CoffeeStorageError::SerializationError(
                "update returned no attributes".to_string(),
            )
        })?;

        Ok(from_item(attributes)?)
    }

    async fn delete(&self, coffee_id: &str) -> CoffeeStorageResult<Coffee> {
        let (key_name, key_value) = Self::key(coffee_id);

        let response = self
            .dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", CoffeeAttribute::CoffeeId.to_string())
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    CoffeeStorageError::CoffeeNotFound
                } else {
                    err.into()
                }
            })?;

        let attributes = response.attributes.ok_or_else(|| {
            CoffeeStorageError::SerializationError(
                "delete returned no attributes".to_string(),
            )
        })?;

        Ok(from_item(attributes)?)
    }

    async fn get_one(&self, coffee_id: &str) -> CoffeeStorageResult<Option<Coffee>> {
        let (key_name, key_value) = Self::key(coffee_id);

        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(key_name, key_value)
            .send()
            .await?;

        response
            .item
            .map(|item| from_item(item).map_err(CoffeeStorageError::from))
            .transpose()
    }

    async fn list(&self) -> CoffeeStorageResult<Vec<Coffee>> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        // Follow pagination until the whole table has been read
        loop {
            let response = self
                .dynamodb_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            items.extend(response.items.unwrap_or_default());

            exclusive_start_key = response.last_evaluated_key;
            if exclusive_start_key.is_none() {
                break;
            }
        }

        tracing::debug!(count = items.len(), "Scanned coffee table");

        Ok(from_items(items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names_match_table_schema() {
        assert_eq!(CoffeeAttribute::CoffeeId.to_string(), "coffeeId");
        assert_eq!(CoffeeAttribute::Name.to_string(), "name");
        assert_eq!(CoffeeAttribute::Price.to_string(), "price");
        assert_eq!(CoffeeAttribute::Available.to_string(), "available");
    }

    #[test]
    fn test_coffee_item_uses_attribute_names() {
        let coffee = Coffee {
            coffee_id: "espresso".to_string(),
            name: "Espresso".to_string(),
            price: 2.5,
            available: false,
        };

        let item: std::collections::HashMap<String, AttributeValue> = to_item(&coffee).unwrap();

        assert_eq!(
            item.get(&CoffeeAttribute::CoffeeId.to_string()),
            Some(&AttributeValue::S("espresso".to_string()))
        );
        assert_eq!(
            item.get(&CoffeeAttribute::Available.to_string()),
            Some(&AttributeValue::Bool(false))
        );
        assert_eq!(
            item.get(&CoffeeAttribute::Price.to_string()),
            Some(&AttributeValue::N("2.5".to_string()))
        );
    }
}
