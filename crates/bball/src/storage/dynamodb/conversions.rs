//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! entries. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bball_core::entry::ItemEntry;
use bball_core::storage::RepositoryError;
use chrono::{DateTime, Utc};

pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_CREATED_AT: &str = "created_at";
pub const ATTR_UPDATED_AT: &str = "updated_at";

/// Convert an entry to a DynamoDB item. `description` is not stored.
pub fn entry_to_item(entry: &ItemEntry) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let id = entry
        .id
        .clone()
        .ok_or_else(|| RepositoryError::InvalidData("Entry has no id".to_string()))?;

    let mut item = HashMap::new();
    item.insert(ATTR_ID.to_string(), AttributeValue::S(id));
    item.insert(ATTR_NAME.to_string(), AttributeValue::S(entry.name.clone()));
    item.insert(
        ATTR_VALUE.to_string(),
        AttributeValue::N(entry.value.to_string()),
    );
    if let Some(created_at) = entry.created_at {
        item.insert(
            ATTR_CREATED_AT.to_string(),
            AttributeValue::S(created_at.to_rfc3339()),
        );
    }
    if let Some(updated_at) = entry.updated_at {
        item.insert(
            ATTR_UPDATED_AT.to_string(),
            AttributeValue::S(updated_at.to_rfc3339()),
        );
    }

    Ok(item)
}

/// Convert a DynamoDB item to an entry.
///
/// Missing timestamps become `None`; malformed ones are an error.
pub fn item_to_entry(item: &HashMap<String, AttributeValue>) -> Result<ItemEntry, RepositoryError> {
    Ok(ItemEntry {
        id: Some(get_string(item, ATTR_ID)?),
        name: get_string(item, ATTR_NAME)?,
        description: None,
        value: get_number(item, ATTR_VALUE)?,
        created_at: get_optional_datetime(item, ATTR_CREATED_AT)?,
        updated_at: get_optional_datetime(item, ATTR_UPDATED_AT)?,
    })
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

fn get_optional_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    let Some(s) = item.get(key).and_then(|v| v.as_s().ok()) else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(s)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
