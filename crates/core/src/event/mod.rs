//! Inbound event shapes and the outbound response envelope.

mod action;
mod http_mapping;
mod requests;
mod response;
pub mod schema;

pub use action::{Action, UnknownAction, TEST_FAILURE_ACTION};
pub use http_mapping::{error_kind_to_status_code, ErrorKind};
pub use requests::{ActionData, ActionEvent, RecordEvent};
pub use response::{Response, INTERNAL_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
pub use schema::{SchemaError, ACTION_EVENT_SCHEMA};
