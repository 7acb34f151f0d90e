//! Update and condition expressions.
//!
//! Pure functions that turn a patch into the UpdateItem request parts.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bball_core::entry::EntryPatch;
use chrono::{DateTime, Utc};

use super::conversions::{ATTR_ID, ATTR_NAME, ATTR_UPDATED_AT, ATTR_VALUE};

/// Only update items that already exist.
pub fn item_exists_condition() -> String {
    format!("attribute_exists({ATTR_ID})")
}

/// The parts of an UpdateItem request generated from a patch.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    /// Placeholder names. `name` and `value` are reserved words, so they are
    /// always aliased.
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl UpdateExpression {
    /// Attribute names to send, or `None` when empty (DynamoDB rejects an
    /// empty map).
    pub fn names_or_none(&self) -> Option<HashMap<String, String>> {
        (!self.names.is_empty()).then(|| self.names.clone())
    }
}

/// Builds `SET updated_at = :updated_at[, #n = :name][, #v = :value]`.
///
/// `description` is ignored: the key-value store does not keep it.
pub fn build_update_expression(patch: &EntryPatch, now: DateTime<Utc>) -> UpdateExpression {
    let mut clauses = vec![format!("{ATTR_UPDATED_AT} = :updated_at")];
    let mut names = HashMap::new();
    let mut values = HashMap::new();
    values.insert(
        ":updated_at".to_string(),
        AttributeValue::S(now.to_rfc3339()),
    );

    if let Some(name) = &patch.name {
        clauses.push("#n = :name".to_string());
        names.insert("#n".to_string(), ATTR_NAME.to_string());
        values.insert(":name".to_string(), AttributeValue::S(name.clone()));
    }

    if let Some(value) = patch.value {
        clauses.push("#v = :value".to_string());
        names.insert("#v".to_string(), ATTR_VALUE.to_string());
        values.insert(":value".to_string(), AttributeValue::N(value.to_string()));
    }

    UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_condition_requires_existing_item() {
        assert_eq!(item_exists_condition(), "attribute_exists(id)");
    }

    #[test]
    fn test_name_and_value() {
        let patch = EntryPatch::new().with_name("Updated").with_value(10);
        let update = build_update_expression(&patch, now());

        assert_eq!(
            update.expression,
            "SET updated_at = :updated_at, #n = :name, #v = :value"
        );
        assert_eq!(update.names.get("#n").map(String::as_str), Some("name"));
        assert_eq!(update.names.get("#v").map(String::as_str), Some("value"));
        assert_eq!(
            update.values.get(":value"),
            Some(&AttributeValue::N("10".to_string()))
        );
        assert_eq!(
            update.values.get(":updated_at"),
            Some(&AttributeValue::S(now().to_rfc3339()))
        );
    }

    #[test]
    fn test_value_only() {
        let update = build_update_expression(&EntryPatch::new().with_value(0), now());

        assert_eq!(update.expression, "SET updated_at = :updated_at, #v = :value");
        assert!(!update.names.contains_key("#n"));
        assert!(!update.values.contains_key(":name"));
    }

    #[test]
    fn test_empty_patch_only_touches_updated_at() {
        let update = build_update_expression(&EntryPatch::new(), now());

        assert_eq!(update.expression, "SET updated_at = :updated_at");
        assert_eq!(update.names_or_none(), None);
        assert_eq!(update.values.len(), 1);
    }

    #[test]
    fn test_description_is_ignored() {
        let update =
            build_update_expression(&EntryPatch::new().with_description("not stored"), now());
        assert_eq!(update.expression, "SET updated_at = :updated_at");
    }
}
