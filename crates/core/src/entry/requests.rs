//! Request types for entry operations.
//!
//! Pure data with validation; no I/O.

use serde::{Deserialize, Serialize};

use super::types::Entry;
use super::validation::{validate_name, validate_value};
use super::ValidationError;

/// Request payload for creating a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl CreateEntryRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            value: None,
        }
    }

    /// Set the entry description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the entry value.
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Validates the request and builds the unsaved entry.
    ///
    /// Name and description are trimmed, description defaults to empty and
    /// value defaults to zero.
    pub fn validate<K>(&self) -> Result<Entry<K>, ValidationError> {
        let name = validate_name(&self.name)?;
        let value = validate_value(self.value.unwrap_or(0))?;
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        Ok(Entry::new(name, value).with_description(description))
    }
}

/// A partial update: only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl EntryPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a patch that rewrites every mutable field of `entry`.
    pub fn full<K>(entry: &Entry<K>) -> Self {
        Self {
            name: Some(entry.name.clone()),
            description: entry.description.clone(),
            value: Some(entry.value),
        }
    }

    /// Set the entry name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the entry description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the entry value.
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns true when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.value.is_none()
    }

    /// Validates every supplied field with the create-time rules.
    ///
    /// Returns the normalized patch; on error nothing in it may be persisted.
    pub fn validate(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: self.name.as_deref().map(validate_name).transpose()?,
            description: self.description.as_deref().map(|d| d.trim().to_string()),
            value: self.value.map(validate_value).transpose()?,
        })
    }

    /// Apply the supplied fields to an existing entry.
    pub fn apply_to<K>(&self, entry: &mut Entry<K>) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(description) = &self.description {
            entry.description = Some(description.clone());
        }
        if let Some(value) = self.value {
            entry.value = value;
        }
    }
}
