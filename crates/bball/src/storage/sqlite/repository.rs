//! SQLite repository implementation.

use std::sync::Arc;

use async_trait::async_trait;

use bball_core::entry::{EntryPatch, RecordEntry, DEFAULT_LIST_LIMIT};
use bball_core::storage::{EntryRepository, Result, StorageKind};

use super::connection::SqliteConnectionProvider;
use super::conversions::row_to_entry;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Relational entry repository backed by SQLite.
///
/// The connection comes from a shared [`SqliteConnectionProvider`] and is
/// opened on the first call.
#[derive(Clone)]
pub struct SqliteRepository {
    provider: Arc<SqliteConnectionProvider>,
}

impl SqliteRepository {
    pub fn new(provider: Arc<SqliteConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Repository over a file-based database at `path`.
    pub fn open(path: impl Into<String>) -> Self {
        Self::new(Arc::new(SqliteConnectionProvider::new(path)))
    }

    /// Repository over a private in-memory database.
    ///
    /// Useful for testing; call `create_table_if_not_exists` before use.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(SqliteConnectionProvider::in_memory()))
    }
}

#[async_trait]
impl EntryRepository<i64> for SqliteRepository {
    fn kind(&self) -> StorageKind {
        StorageKind::Relational
    }

    async fn create(&self, entry: &RecordEntry) -> Result<RecordEntry> {
        let id = entry.id;
        let name = entry.name.clone();
        let description = entry.description.clone().unwrap_or_default();
        let value = entry.value;

        let created = self
            .provider
            .connection()
            .await?
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_ENTRY,
                    rusqlite::params![id, name, description, value],
                    row_to_entry,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error(e, id.map_or("unknown".to_string(), |id| id.to_string()))
            })?;

        tracing::debug!(id = ?created.id, "Inserted entry");
        Ok(created)
    }

    async fn get_by_id(&self, id: &i64) -> Result<Option<RecordEntry>> {
        let id = *id;

        self.provider
            .connection()
            .await?
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRY_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_entry) {
                    Ok(entry) => Ok(Some(entry)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn get_all(&self, limit: Option<usize>) -> Result<Vec<RecordEntry>> {
        let limit = i64::try_from(limit.unwrap_or(DEFAULT_LIST_LIMIT)).unwrap_or(i64::MAX);

        self.provider
            .connection()
            .await?
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRIES).map_err(wrap_err)?;
                let rows = stmt.query_map([limit], row_to_entry).map_err(wrap_err)?;

                let mut entries = Vec::new();
                for row_result in rows {
                    entries.push(row_result.map_err(wrap_err)?);
                }
                Ok(entries)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }

    async fn update(&self, id: &i64, patch: &EntryPatch) -> Result<Option<RecordEntry>> {
        let id = *id;
        let name = patch.name.clone();
        let description = patch.description.clone();
        let value = patch.value;

        self.provider
            .connection()
            .await?
            .call(move |conn| {
                match conn.query_row(
                    schema::UPDATE_ENTRY,
                    rusqlite::params![id, name, description, value],
                    row_to_entry,
                ) {
                    Ok(entry) => Ok(Some(entry)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn delete(&self, id: &i64) -> Result<bool> {
        let id = *id;

        self.provider
            .connection()
            .await?
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ENTRY, [id])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn create_table_if_not_exists(&self) -> Result<()> {
        self.provider
            .connection()
            .await?
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }
}
