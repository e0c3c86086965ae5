//! Error types for coffee storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, get_item::GetItemError, put_item::PutItemError,
    scan::ScanError, update_item::UpdateItemError,
};
use thiserror::Error;

/// Result type alias for coffee storage operations
pub type CoffeeStorageResult<T> = Result<T, CoffeeStorageError>;

/// Storage error types for coffee operations
#[derive(Debug, Error)]
pub enum CoffeeStorageError {
    /// A coffee with the same id already exists
    #[error("Coffee already exists")]
    CoffeeExists,

    /// No coffee exists for the given id
    #[error("Coffee not found")]
    CoffeeNotFound,

    /// An update was requested without any field to change
    #[error("Update contains no fields to change")]
    NoChanges,

    /// Failed to insert coffee into `DynamoDB`
    #[error("Failed to insert coffee into DynamoDB: {0}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to update coffee in `DynamoDB`
    #[error("Failed to update coffee in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// Failed to delete coffee from `DynamoDB`
    #[error("Failed to delete coffee from DynamoDB: {0}")]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// Failed to get coffee from `DynamoDB`
    #[error("Failed to get coffee from DynamoDB: {0}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to scan coffees from `DynamoDB`
    #[error("Failed to scan coffees from DynamoDB: {0}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to convert between a coffee and a `DynamoDB` item
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for CoffeeStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
