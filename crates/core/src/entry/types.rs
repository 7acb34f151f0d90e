use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single record managed by both services.
///
/// `id` and the timestamps are `None` until the repository has persisted the
/// entry. `description` is only carried by the relational backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<K> {
    pub id: Option<K>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Entry stored in the relational backend.
pub type RecordEntry = Entry<i64>;

/// Entry stored in the key-value backend.
pub type ItemEntry = Entry<String>;

impl<K> Entry<K> {
    /// Creates an unsaved entry with the given name and value.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            value,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the description for this entry.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a specific ID for this entry (useful for testing).
    pub fn with_id(mut self, id: K) -> Self {
        self.id = Some(id);
        self
    }
}

impl<K: Serialize> Entry<K> {
    /// Serializes the entry into a JSON mapping.
    ///
    /// Timestamps render as RFC 3339 strings, absent values as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
