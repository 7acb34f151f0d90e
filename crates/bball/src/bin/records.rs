//! Records function: creates one SQLite entry per invocation.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use bball::storage::{SqliteConnectionProvider, SqliteRepository};
use bball::{telemetry, Config, EntryService, RecordsHandler};
use bball_core::event::Response;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    telemetry::init(config.log_format)?;

    let provider = Arc::new(SqliteConnectionProvider::new(config.sqlite_path.clone()));
    let repository = SqliteRepository::new(provider);
    let handler = RecordsHandler::new(EntryService::new(Arc::new(repository)));

    tracing::info!(sqlite_path = %config.sqlite_path, "Starting records function");

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&handler, event)
    }))
    .await
}

async fn function_handler(
    handler: &RecordsHandler,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Invocation started");
    Ok(handler.invoke(&payload).await)
}
