//! Event handlers.
//!
//! Each handler turns one inbound event into one [`Response`] envelope.
//! Failures are mapped here: validation problems become 400s, unexpected
//! store errors are logged in full and answered with a generic 500.

mod items;
mod records;

pub use items::ItemsHandler;
pub use records::RecordsHandler;

use bball_core::event::{ErrorKind, Response, SchemaError};

use crate::error::ServiceError;

pub const CREATED_MESSAGE: &str = "Entry created successfully";
pub const UPDATED_MESSAGE: &str = "Entry updated successfully";
pub const DELETED_MESSAGE: &str = "Entry deleted successfully";

/// Envelope for a failed service call.
pub(crate) fn error_response(err: &ServiceError) -> Response {
    let kind = err.kind();
    match kind {
        ErrorKind::Internal => tracing::error!(error = %err, "Unexpected error"),
        _ => tracing::warn!(error = %err, "Rejected request"),
    }
    Response::error(kind, err.to_string())
}

/// Envelope for an event that does not have the expected shape.
pub(crate) fn schema_error_response(err: &SchemaError) -> Response {
    tracing::warn!(error = %err, "Invalid event");
    Response::error(ErrorKind::SchemaInvalid, format!("Validation error: {err}"))
}
