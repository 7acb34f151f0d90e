//! Records handler: implicit-create events over the relational store.

use serde_json::Value;

use bball_core::event::{RecordEvent, Response};

use super::{error_response, schema_error_response, CREATED_MESSAGE};
use crate::service::EntryService;

/// Handles `{name?, description?, value?}` events, each of which creates one
/// entry.
pub struct RecordsHandler {
    service: EntryService<i64>,
}

impl RecordsHandler {
    pub fn new(service: EntryService<i64>) -> Self {
        Self { service }
    }

    /// Runs the idempotent schema bootstrap, then handles the event.
    pub async fn invoke(&self, event: &Value) -> Response {
        if let Err(err) = self.service.initialize().await {
            tracing::error!(error = %err, "Failed to initialize storage");
            return Response::internal();
        }
        self.handle(event).await
    }

    /// Creates an entry from the event, filling absent fields with defaults.
    pub async fn handle(&self, event: &Value) -> Response {
        tracing::info!(event = %event, "Received event");

        let response = match RecordEvent::from_value(event) {
            Ok(record) => match self.service.create(&record.to_create_request()).await {
                Ok(entry) => Response::ok(Some(CREATED_MESSAGE), Some(entry.to_json())),
                Err(err) => error_response(&err),
            },
            Err(err) => schema_error_response(&err),
        };

        tracing::info!(status = response.status_code, "Returning response");
        response
    }
}
