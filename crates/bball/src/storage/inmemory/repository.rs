//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use bball_core::entry::{Entry, EntryKey, EntryPatch};
use bball_core::storage::{EntryRepository, RepositoryError, Result, StorageKind};

type IdGenerator<K> = Arc<dyn Fn() -> K + Send + Sync>;

#[derive(Debug, Clone)]
struct Stored<K> {
    /// Insertion order, used to break `created_at` ties.
    seq: u64,
    entry: Entry<K>,
}

/// In-memory storage backend for testing.
///
/// Every trait call is counted so tests can assert that validation failures
/// never reach the store, and a failure can be injected to exercise error
/// paths.
#[derive(Clone)]
pub struct InMemoryRepository<K: EntryKey> {
    kind: StorageKind,
    entries: Arc<RwLock<HashMap<K, Stored<K>>>>,
    next_id: IdGenerator<K>,
    next_seq: Arc<AtomicU64>,
    calls: Arc<AtomicUsize>,
    failure: Arc<RwLock<Option<RepositoryError>>>,
}

impl InMemoryRepository<i64> {
    /// A repository that behaves like the relational backend: sequential
    /// ids starting at 1, newest-first listing, `description` kept.
    pub fn relational() -> Self {
        let sequence = Arc::new(AtomicI64::new(0));
        Self::with_ids(
            StorageKind::Relational,
            Arc::new(move || sequence.fetch_add(1, Ordering::SeqCst) + 1),
        )
    }
}

impl InMemoryRepository<String> {
    /// A repository that behaves like the key-value backend: UUID ids,
    /// unordered full scans, `description` dropped.
    pub fn key_value() -> Self {
        Self::with_ids(StorageKind::KeyValue, Arc::new(|| Uuid::new_v4().to_string()))
    }
}

impl<K: EntryKey> InMemoryRepository<K> {
    fn with_ids(kind: StorageKind, next_id: IdGenerator<K>) -> Self {
        Self {
            kind,
            entries: Arc::new(RwLock::new(HashMap::new())),
            next_id,
            next_seq: Arc::new(AtomicU64::new(0)),
            calls: Arc::new(AtomicUsize::new(0)),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Number of repository calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent call fail with `err`.
    pub async fn fail_with(&self, err: RepositoryError) {
        *self.failure.write().await = Some(err);
    }

    /// Number of stored entries. Not counted as a call.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.read().await.as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<K: EntryKey> EntryRepository<K> for InMemoryRepository<K> {
    fn kind(&self) -> StorageKind {
        self.kind
    }

    async fn create(&self, entry: &Entry<K>) -> Result<Entry<K>> {
        self.record_call().await?;

        let now = Utc::now();
        let mut stored = entry.clone();
        let id = stored.id.clone().unwrap_or_else(|| (self.next_id)());
        stored.id = Some(id.clone());

        match self.kind {
            StorageKind::Relational => {
                stored.description = Some(stored.description.unwrap_or_default());
                stored.created_at = Some(now);
            }
            StorageKind::KeyValue => {
                stored.description = None;
                stored.created_at = Some(stored.created_at.unwrap_or(now));
            }
        }
        stored.updated_at = Some(now);

        let mut entries = self.entries.write().await;
        if self.kind.is_relational() && entries.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Entry",
                id: id.to_string(),
            });
        }
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        entries.insert(
            id,
            Stored {
                seq,
                entry: stored.clone(),
            },
        );
        Ok(stored)
    }

    async fn get_by_id(&self, id: &K) -> Result<Option<Entry<K>>> {
        self.record_call().await?;
        let entries = self.entries.read().await;
        Ok(entries.get(id).map(|stored| stored.entry.clone()))
    }

    async fn get_all(&self, limit: Option<usize>) -> Result<Vec<Entry<K>>> {
        self.record_call().await?;
        let entries = self.entries.read().await;

        match self.kind {
            StorageKind::Relational => {
                let mut stored: Vec<&Stored<K>> = entries.values().collect();
                stored.sort_by(|a, b| {
                    b.entry
                        .created_at
                        .cmp(&a.entry.created_at)
                        .then(b.seq.cmp(&a.seq))
                });
                Ok(stored
                    .into_iter()
                    .take(limit.unwrap_or(bball_core::entry::DEFAULT_LIST_LIMIT))
                    .map(|s| s.entry.clone())
                    .collect())
            }
            StorageKind::KeyValue => Ok(entries.values().map(|s| s.entry.clone()).collect()),
        }
    }

    async fn update(&self, id: &K, patch: &EntryPatch) -> Result<Option<Entry<K>>> {
        self.record_call().await?;
        let mut entries = self.entries.write().await;

        let Some(stored) = entries.get_mut(id) else {
            return Ok(None);
        };

        let entry = &mut stored.entry;
        match self.kind {
            StorageKind::Relational => patch.apply_to(entry),
            StorageKind::KeyValue => EntryPatch {
                description: None,
                ..patch.clone()
            }
            .apply_to(entry),
        }

        let now = Utc::now();
        entry.updated_at = Some(entry.updated_at.map_or(now, |prev| prev.max(now)));
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: &K) -> Result<bool> {
        self.record_call().await?;
        let mut entries = self.entries.write().await;
        Ok(entries.remove(id).is_some())
    }

    async fn create_table_if_not_exists(&self) -> Result<()> {
        self.record_call().await
    }
}
