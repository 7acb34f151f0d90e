use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entry::{CreateEntryRequest, EntryPatch};

use super::schema::{repr, SchemaError};

/// The explicit-action event handled by the items service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub action: String,
    #[serde(default)]
    pub data: ActionData,
}

/// The `data` payload of an [`ActionEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl ActionData {
    /// Create request from the payload. A missing name becomes empty and is
    /// rejected by validation.
    pub fn to_create_request(&self) -> CreateEntryRequest {
        CreateEntryRequest {
            name: self.name.clone().unwrap_or_default(),
            description: None,
            value: self.value,
        }
    }

    /// Patch with whichever fields the payload carries.
    pub fn to_patch(&self) -> EntryPatch {
        EntryPatch {
            name: self.name.clone(),
            description: None,
            value: self.value,
        }
    }
}

/// The implicit-create event handled by the records service.
///
/// Absent fields fall back to the sample entry the function has always
/// created when invoked without a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEvent {
    pub name: String,
    pub description: String,
    pub value: i64,
}

impl RecordEvent {
    pub const DEFAULT_NAME: &'static str = "Test Entry";
    pub const DEFAULT_DESCRIPTION: &'static str = "Mock test entry";
    pub const DEFAULT_VALUE: i64 = 42;

    /// Reads the event fields, rejecting wrongly-typed ones.
    pub fn from_value(event: &Value) -> Result<Self, SchemaError> {
        Ok(Self {
            name: string_field(event, "name")?.unwrap_or_else(|| Self::DEFAULT_NAME.to_string()),
            description: string_field(event, "description")?
                .unwrap_or_else(|| Self::DEFAULT_DESCRIPTION.to_string()),
            value: integer_field(event, "value")?.unwrap_or(Self::DEFAULT_VALUE),
        })
    }

    pub fn to_create_request(&self) -> CreateEntryRequest {
        CreateEntryRequest::new(self.name.clone())
            .with_description(self.description.clone())
            .with_value(self.value)
    }
}

fn string_field(event: &Value, name: &str) -> Result<Option<String>, SchemaError> {
    match event.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SchemaError {
            path: name.to_string(),
            message: format!("{} is not of type 'string'", repr(other)),
        }),
    }
}

fn integer_field(event: &Value, name: &str) -> Result<Option<i64>, SchemaError> {
    match event.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| SchemaError {
            path: name.to_string(),
            message: format!("{} is not of type 'integer'", repr(value)),
        }),
    }
}
