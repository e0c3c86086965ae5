use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use coffee_backend::{routes::coffees::SharedStore, server, types::Environment};
use coffee_storage::CoffeeStorage;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Use JSON format for staging/production, regular format for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let table_name = environment.table_name();
    tracing::info!("Starting in {environment:?} environment with table {table_name}");

    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
    let store: SharedStore = Arc::new(CoffeeStorage::new(dynamodb_client, table_name));

    server::start(environment, store).await
}
