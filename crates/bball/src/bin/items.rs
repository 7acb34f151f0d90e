//! Items function: explicit-action CRUD over DynamoDB.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use bball::storage::{DynamoDbClientProvider, DynamoDbRepository};
use bball::{telemetry, Config, EntryService, ItemsHandler};
use bball_core::event::Response;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    telemetry::init(config.log_format)?;

    let settings = config.aws_settings();
    tracing::info!(
        table = %config.dynamodb_table_name,
        destination = %settings.target_display(),
        "Starting items function"
    );

    let provider = Arc::new(DynamoDbClientProvider::new(settings));
    provider.initialize().await;
    let repository = DynamoDbRepository::new(provider, config.dynamodb_table_name.clone());
    let handler = ItemsHandler::new(EntryService::new(Arc::new(repository)));

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&handler, event)
    }))
    .await
}

/// A `test_failure` event fails the invocation so the runtime reports a
/// function error.
async fn function_handler(
    handler: &ItemsHandler,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Invocation started");
    Ok(handler.handle(&payload).await?)
}
