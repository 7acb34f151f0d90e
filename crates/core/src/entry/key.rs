use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

use super::ValidationError;

/// An identifier type usable as the primary key of an [`Entry`](super::Entry).
///
/// Relational entries use store-generated integers, key-value entries use
/// UUID strings generated by the repository.
pub trait EntryKey:
    Clone + Debug + Display + PartialEq + Eq + Hash + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Checks that the identifier could refer to a stored entry.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl EntryKey for i64 {
    fn validate(&self) -> Result<(), ValidationError> {
        if *self <= 0 {
            return Err(ValidationError::NonPositiveId);
        }
        Ok(())
    }
}

impl EntryKey for String {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.trim().is_empty() {
            return Err(ValidationError::BlankId);
        }
        Ok(())
    }
}
