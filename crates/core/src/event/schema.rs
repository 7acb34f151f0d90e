//! Statically defined validation ruleset for inbound events.
//!
//! Each [`Schema`] lists the fields of a JSON object and the rule each field
//! must satisfy. Unknown fields are allowed. Messages follow JSON Schema
//! wording so that callers see the same text a schema validator would print.

use serde_json::{Map, Value};
use thiserror::Error;

use super::action::Action;

/// A violation of an event schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", display(.path, .message))]
pub struct SchemaError {
    /// Dotted path of the offending field; empty for the event itself.
    pub path: String,
    pub message: String,
}

fn display(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{path}: {message}")
    }
}

impl SchemaError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Fields of a JSON object.
#[derive(Debug)]
pub struct Schema {
    pub fields: &'static [Field],
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub rule: Rule,
}

#[derive(Debug)]
pub enum Rule {
    /// A string of at least `min_length` characters, restricted to `one_of`
    /// when that list is not empty.
    String {
        min_length: usize,
        one_of: &'static [&'static str],
    },
    /// An integer, optionally bounded below.
    Integer { minimum: Option<i64> },
    /// A nested object.
    Object(&'static Schema),
}

const ACTION_NAMES: &[&str] = &["create", "get", "list", "update", "delete"];

/// `data` for every action: all fields optional.
pub static DATA_SCHEMA: Schema = Schema {
    fields: &[
        Field {
            name: "id",
            required: false,
            rule: Rule::String {
                min_length: 1,
                one_of: &[],
            },
        },
        Field {
            name: "name",
            required: false,
            rule: Rule::String {
                min_length: 0,
                one_of: &[],
            },
        },
        Field {
            name: "value",
            required: false,
            rule: Rule::Integer { minimum: Some(0) },
        },
    ],
};

/// `data` when `action` is `create`: a non-empty name is required.
pub static CREATE_DATA_SCHEMA: Schema = Schema {
    fields: &[
        Field {
            name: "name",
            required: true,
            rule: Rule::String {
                min_length: 1,
                one_of: &[],
            },
        },
        Field {
            name: "value",
            required: false,
            rule: Rule::Integer { minimum: Some(0) },
        },
    ],
};

/// The explicit-action event accepted by the items handler.
pub static ACTION_EVENT_SCHEMA: Schema = Schema {
    fields: &[
        Field {
            name: "action",
            required: true,
            rule: Rule::String {
                min_length: 0,
                one_of: ACTION_NAMES,
            },
        },
        Field {
            name: "data",
            required: false,
            rule: Rule::Object(&DATA_SCHEMA),
        },
    ],
};

/// Validates `value` against `schema`.
pub fn validate(value: &Value, schema: &Schema) -> Result<(), SchemaError> {
    validate_at(value, schema, "")
}

/// Validates an explicit-action event and returns its action.
///
/// Besides [`ACTION_EVENT_SCHEMA`], a `create` event must carry `data`
/// matching [`CREATE_DATA_SCHEMA`].
pub fn validate_action_event(event: &Value) -> Result<Action, SchemaError> {
    validate(event, &ACTION_EVENT_SCHEMA)?;

    let action = event
        .get("action")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Action>().ok())
        .ok_or_else(|| SchemaError::new("action", "is not a dispatchable action"))?;

    if action == Action::Create {
        match event.get("data") {
            Some(data) => validate_at(data, &CREATE_DATA_SCHEMA, "data")?,
            None => return Err(SchemaError::new("", "'data' is a required property")),
        }
    }

    Ok(action)
}

fn validate_at(value: &Value, schema: &Schema, path: &str) -> Result<(), SchemaError> {
    let object = as_object(value, path)?;

    for field in schema.fields {
        let field_path = join(path, field.name);
        match object.get(field.name) {
            Some(field_value) => check_rule(field_value, &field.rule, &field_path)?,
            None if field.required => {
                return Err(SchemaError::new(
                    path,
                    format!("'{}' is a required property", field.name),
                ));
            }
            None => {}
        }
    }

    Ok(())
}

fn check_rule(value: &Value, rule: &Rule, path: &str) -> Result<(), SchemaError> {
    match rule {
        Rule::String { min_length, one_of } => {
            let s = value
                .as_str()
                .ok_or_else(|| not_of_type(value, "string", path))?;
            if s.chars().count() < *min_length {
                let message = if *min_length == 1 {
                    format!("{} should be non-empty", repr(value))
                } else {
                    format!("{} is too short", repr(value))
                };
                return Err(SchemaError::new(path, message));
            }
            if !one_of.is_empty() && !one_of.contains(&s) {
                let allowed = one_of
                    .iter()
                    .map(|name| format!("'{name}'"))
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(SchemaError::new(
                    path,
                    format!("{} is not one of [{allowed}]", repr(value)),
                ));
            }
            Ok(())
        }
        Rule::Integer { minimum } => {
            let n = value
                .as_i64()
                .ok_or_else(|| not_of_type(value, "integer", path))?;
            if let Some(minimum) = minimum {
                if n < *minimum {
                    return Err(SchemaError::new(
                        path,
                        format!("{n} is less than the minimum of {minimum}"),
                    ));
                }
            }
            Ok(())
        }
        Rule::Object(schema) => validate_at(value, schema, path),
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| not_of_type(value, "object", path))
}

fn not_of_type(value: &Value, type_name: &str, path: &str) -> SchemaError {
    SchemaError::new(path, format!("{} is not of type '{type_name}'", repr(value)))
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// Renders a value the way schema validators quote it: strings in single quotes.
pub(crate) fn repr(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_create_event() {
        let event = json!({"action": "create", "data": {"name": "Test", "value": 42}});
        assert_eq!(validate_action_event(&event), Ok(Action::Create));
    }

    #[test]
    fn test_list_needs_no_data() {
        assert_eq!(validate_action_event(&json!({"action": "list"})), Ok(Action::List));
    }

    #[test]
    fn test_missing_action() {
        let err = validate_action_event(&json!({"data": {"name": "Test"}})).unwrap_err();
        assert_eq!(err.to_string(), "'action' is a required property");
    }

    #[test]
    fn test_invalid_action() {
        let err = validate_action_event(&json!({"action": "invalid", "data": {}})).unwrap_err();
        assert_eq!(err.path, "action");
        assert_eq!(
            err.message,
            "'invalid' is not one of ['create', 'get', 'list', 'update', 'delete']"
        );
    }

    #[test]
    fn test_action_must_be_string() {
        let err = validate_action_event(&json!({"action": 3})).unwrap_err();
        assert_eq!(err.to_string(), "action: 3 is not of type 'string'");
    }

    #[test]
    fn test_create_with_empty_name() {
        let err =
            validate_action_event(&json!({"action": "create", "data": {"name": "", "value": 42}}))
                .unwrap_err();
        assert_eq!(err.to_string(), "data.name: '' should be non-empty");
    }

    #[test]
    fn test_create_without_name() {
        let err = validate_action_event(&json!({"action": "create", "data": {"value": 1}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "data: 'name' is a required property");
    }

    #[test]
    fn test_create_without_data() {
        let err = validate_action_event(&json!({"action": "create"})).unwrap_err();
        assert_eq!(err.to_string(), "'data' is a required property");
    }

    #[test]
    fn test_negative_value_rejected_for_any_action() {
        let err =
            validate_action_event(&json!({"action": "update", "data": {"id": "1", "value": -1}}))
                .unwrap_err();
        assert_eq!(err.to_string(), "data.value: -1 is less than the minimum of 0");
    }

    #[test]
    fn test_fractional_value_rejected() {
        let err = validate_action_event(&json!({"action": "create", "data": {"name": "A", "value": 1.5}}))
            .unwrap_err();
        assert_eq!(err.message, "1.5 is not of type 'integer'");
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = validate_action_event(&json!({"action": "get", "data": {"id": ""}})).unwrap_err();
        assert_eq!(err.path, "data.id");
    }

    #[test]
    fn test_event_must_be_object() {
        let err = validate(&json!("create"), &ACTION_EVENT_SCHEMA).unwrap_err();
        assert_eq!(err.to_string(), "'create' is not of type 'object'");
    }

    #[test]
    fn test_data_must_be_object() {
        let err = validate_action_event(&json!({"action": "get", "data": null})).unwrap_err();
        assert_eq!(err.to_string(), "data: null is not of type 'object'");
    }

    #[test]
    fn test_update_allows_empty_name_at_schema_level() {
        // Business rules reject this later; the schema only guards create.
        let event = json!({"action": "update", "data": {"id": "1", "name": ""}});
        assert_eq!(validate_action_event(&event), Ok(Action::Update));
    }
}
