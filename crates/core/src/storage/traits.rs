use async_trait::async_trait;

use crate::entry::{Entry, EntryKey, EntryPatch};

use super::{Result, StorageKind};

/// Repository for entry operations.
#[async_trait]
pub trait EntryRepository<K: EntryKey>: Send + Sync {
    /// Which behavioural flavour this backend has.
    fn kind(&self) -> StorageKind;

    /// Persists a new entry, assigning its ID (if absent) and both timestamps.
    async fn create(&self, entry: &Entry<K>) -> Result<Entry<K>>;

    /// Gets an entry by its ID.
    async fn get_by_id(&self, id: &K) -> Result<Option<Entry<K>>>;

    /// Lists entries. Only relational backends honour `limit` and ordering.
    async fn get_all(&self, limit: Option<usize>) -> Result<Vec<Entry<K>>>;

    /// Writes the supplied fields and refreshes `updated_at`.
    ///
    /// Returns `None` when no entry exists for `id`.
    async fn update(&self, id: &K, patch: &EntryPatch) -> Result<Option<Entry<K>>>;

    /// Deletes an entry. Returns `false` when nothing matched.
    async fn delete(&self, id: &K) -> Result<bool>;

    /// Creates the backing table when missing. Safe to call on every start.
    async fn create_table_if_not_exists(&self) -> Result<()> {
        Ok(())
    }
}
