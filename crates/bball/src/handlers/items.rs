//! Items handler: explicit-action events over the key-value store.

use serde_json::Value;

use bball_core::entry::{Entry, ValidationError};
use bball_core::event::{schema, Action, ActionData, ActionEvent, Response, TEST_FAILURE_ACTION};

use super::{error_response, schema_error_response, CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use crate::error::{InvocationError, ServiceError};
use crate::service::EntryService;

/// Handles `{action, data}` events.
///
/// The event is checked against the static action schema before anything is
/// dispatched; a schema violation never reaches the service.
pub struct ItemsHandler {
    service: EntryService<String>,
}

impl ItemsHandler {
    pub fn new(service: EntryService<String>) -> Self {
        Self { service }
    }

    /// Handles one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::TestFailure`] for the `test_failure`
    /// action. Every other outcome, including failures, is a [`Response`].
    pub async fn handle(&self, event: &Value) -> Result<Response, InvocationError> {
        tracing::info!(event = %event, "Received event");

        if event.get("action").and_then(Value::as_str) == Some(TEST_FAILURE_ACTION) {
            tracing::warn!("Failing invocation on request");
            return Err(InvocationError::TestFailure);
        }

        let response = match parse_event(event) {
            Ok(ActionEvent { action, data }) => self.dispatch(&action, data).await,
            Err(response) => response,
        };

        tracing::info!(status = response.status_code, "Returning response");
        Ok(response)
    }

    /// Routes an action to its operation.
    pub async fn dispatch(&self, action: &str, data: ActionData) -> Response {
        let action = match action.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected request");
                return Response::bad_request(err.to_string());
            }
        };

        match action {
            Action::Create => self.create(&data).await,
            Action::Get => self.get(&data).await,
            Action::List => self.list().await,
            Action::Update => self.update(&data).await,
            Action::Delete => self.delete(&data).await,
        }
    }

    async fn create(&self, data: &ActionData) -> Response {
        match self.service.create(&data.to_create_request()).await {
            Ok(entry) => Response::ok(Some(CREATED_MESSAGE), Some(entry.to_json())),
            Err(err) => error_response(&err),
        }
    }

    async fn get(&self, data: &ActionData) -> Response {
        let id = match require_id(data) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match self.service.get(&id).await {
            Ok(Some(entry)) => Response::ok(None, Some(entry.to_json())),
            Ok(None) => Response::not_found(),
            Err(err) => error_response(&err),
        }
    }

    async fn list(&self) -> Response {
        match self.service.list(None).await {
            Ok(entries) => Response::ok(
                None,
                Some(Value::Array(entries.iter().map(Entry::to_json).collect())),
            ),
            Err(err) => error_response(&err),
        }
    }

    async fn update(&self, data: &ActionData) -> Response {
        let id = match require_id(data) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match self.service.update(&id, &data.to_patch()).await {
            Ok(Some(entry)) => Response::ok(Some(UPDATED_MESSAGE), Some(entry.to_json())),
            Ok(None) => Response::not_found(),
            Err(err) => error_response(&err),
        }
    }

    async fn delete(&self, data: &ActionData) -> Response {
        let id = match require_id(data) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match self.service.delete(&id).await {
            Ok(true) => Response::ok(Some(DELETED_MESSAGE), None),
            Ok(false) => Response::not_found(),
            Err(err) => error_response(&err),
        }
    }
}

fn parse_event(event: &Value) -> Result<ActionEvent, Response> {
    schema::validate_action_event(event).map_err(|err| schema_error_response(&err))?;
    serde_json::from_value(event.clone()).map_err(|err| {
        tracing::warn!(error = %err, "Invalid event");
        Response::bad_request(format!("Validation error: {err}"))
    })
}

fn require_id(data: &ActionData) -> Result<String, Response> {
    data.id
        .clone()
        .ok_or_else(|| error_response(&ServiceError::from(ValidationError::MissingField("id"))))
}
