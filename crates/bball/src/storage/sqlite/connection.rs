//! Lazily opened, process-wide SQLite connection.

use tokio::sync::OnceCell;
use tokio_rusqlite::Connection;

use bball_core::storage::{RepositoryError, Result};

const IN_MEMORY_PATH: &str = ":memory:";

/// Opens the database on first use and hands out the same connection
/// afterwards.
///
/// Concurrent first callers share one open; a failed open is not cached, so
/// the next call tries again.
pub struct SqliteConnectionProvider {
    path: String,
    conn: OnceCell<Connection>,
}

impl SqliteConnectionProvider {
    /// Provider for a file-based database, created if it does not exist.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            conn: OnceCell::new(),
        }
    }

    /// Provider for a private in-memory database. Data is lost when the
    /// provider is dropped.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_PATH)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.conn.initialized()
    }

    /// Opens the connection if it is not open yet.
    pub async fn initialize(&self) -> Result<()> {
        self.connection().await.map(|_| ())
    }

    /// Returns the connection, opening it on first use.
    pub async fn connection(&self) -> Result<&Connection> {
        self.conn
            .get_or_try_init(|| async {
                tracing::debug!(path = %self.path, "Opening SQLite database");
                let opened = if self.path == IN_MEMORY_PATH {
                    Connection::open_in_memory().await
                } else {
                    Connection::open(&self.path).await
                };
                opened.map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
            })
            .await
    }
}
