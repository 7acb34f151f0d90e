//! Entry service: business rules in front of a repository.
//!
//! Every operation validates its input before the repository is touched.
//! Behaviour that differs between the relational and key-value stores is
//! chosen from [`EntryRepository::kind`].

use std::sync::Arc;

use bball_core::entry::{
    validate_limit, CreateEntryRequest, Entry, EntryKey, EntryPatch, DEFAULT_LIST_LIMIT,
};
use bball_core::storage::{EntryRepository, StorageKind};

use crate::error::ServiceError;

pub type Result<T> = std::result::Result<T, ServiceError>;

pub struct EntryService<K: EntryKey> {
    repository: Arc<dyn EntryRepository<K>>,
}

impl<K: EntryKey> Clone for EntryService<K> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<K: EntryKey> EntryService<K> {
    pub fn new(repository: Arc<dyn EntryRepository<K>>) -> Self {
        Self { repository }
    }

    pub fn kind(&self) -> StorageKind {
        self.repository.kind()
    }

    /// Bootstraps the store schema. Idempotent; a no-op for key-value stores.
    pub async fn initialize(&self) -> Result<()> {
        self.repository.create_table_if_not_exists().await?;
        Ok(())
    }

    pub async fn create(&self, request: &CreateEntryRequest) -> Result<Entry<K>> {
        let entry = request.validate::<K>()?;
        let created = self.repository.create(&entry).await?;
        tracing::info!(id = ?created.id, "Created entry");
        Ok(created)
    }

    pub async fn get(&self, id: &K) -> Result<Option<Entry<K>>> {
        id.validate()?;
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Lists entries.
    ///
    /// Relational stores return at most `limit` entries (default 100, valid
    /// range 1 to 1000), newest first. Key-value stores ignore `limit` and
    /// return every entry in no particular order.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Entry<K>>> {
        let limit = match self.kind() {
            StorageKind::Relational => Some(validate_limit(
                limit.unwrap_or(DEFAULT_LIST_LIMIT as i64),
            )?),
            StorageKind::KeyValue => None,
        };
        Ok(self.repository.get_all(limit).await?)
    }

    /// Applies `patch` to the entry `id`. Returns `None` when it does not
    /// exist.
    ///
    /// The relational flow reads the current entry first and writes the whole
    /// merged entry back, so a missing entry is reported before the patch is
    /// validated. The key-value flow validates the patch and leaves the
    /// existence check to the conditional write.
    pub async fn update(&self, id: &K, patch: &EntryPatch) -> Result<Option<Entry<K>>> {
        id.validate()?;

        let updated = match self.kind() {
            StorageKind::Relational => {
                let Some(mut entry) = self.repository.get_by_id(id).await? else {
                    return Ok(None);
                };
                patch.validate()?.apply_to(&mut entry);
                self.repository
                    .update(id, &EntryPatch::full(&entry))
                    .await?
            }
            StorageKind::KeyValue => {
                let patch = patch.validate()?;
                self.repository.update(id, &patch).await?
            }
        };

        if updated.is_some() {
            tracing::info!(id = %id, "Updated entry");
        }
        Ok(updated)
    }

    /// Deletes the entry `id`. Returns whether anything was removed.
    pub async fn delete(&self, id: &K) -> Result<bool> {
        id.validate()?;
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(id = %id, "Deleted entry");
        }
        Ok(deleted)
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use bball_core::entry::ValidationError;
    use bball_core::storage::RepositoryError;

    use crate::storage::InMemoryRepository;

    fn records() -> (EntryService<i64>, InMemoryRepository<i64>) {
        let repo = InMemoryRepository::relational();
        (EntryService::new(Arc::new(repo.clone())), repo)
    }

    fn items() -> (EntryService<String>, InMemoryRepository<String>) {
        let repo = InMemoryRepository::key_value();
        (EntryService::new(Arc::new(repo.clone())), repo)
    }

    fn validation(err: ServiceError) -> ValidationError {
        match err {
            ServiceError::Validation(err) => err,
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_trims_and_persists() {
        let (service, repo) = records();

        let created = service
            .create(&CreateEntryRequest::new("  Test  ").with_value(42))
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, "Test");
        assert_eq!(created.value, 42);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name_without_store_call() {
        let (service, repo) = items();

        for name in ["", "   "] {
            let err = service
                .create(&CreateEntryRequest::new(name))
                .await
                .unwrap_err();
            assert_eq!(validation(err), ValidationError::EmptyName);
        }
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_value_boundary() {
        let (service, repo) = records();

        let err = service
            .create(&CreateEntryRequest::new("a").with_value(-1))
            .await
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::NegativeValue);
        assert_eq!(repo.call_count(), 0);

        let created = service
            .create(&CreateEntryRequest::new("a").with_value(0))
            .await
            .unwrap();
        assert_eq!(created.value, 0);
    }

    #[tokio::test]
    async fn test_create_name_length_boundary() {
        let (service, _) = records();

        assert!(service
            .create(&CreateEntryRequest::new("x".repeat(255)))
            .await
            .is_ok());

        let err = service
            .create(&CreateEntryRequest::new("x".repeat(256)))
            .await
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::NameTooLong);
    }

    #[tokio::test]
    async fn test_get_validates_id() {
        let (record_service, record_repo) = records();
        assert_eq!(
            validation(record_service.get(&0).await.unwrap_err()),
            ValidationError::NonPositiveId
        );
        assert_eq!(record_repo.call_count(), 0);

        let (item_service, _) = items();
        assert_eq!(
            validation(item_service.get(&"  ".to_string()).await.unwrap_err()),
            ValidationError::BlankId
        );
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (service, _) = records();
        assert_eq!(service.get(&7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_limit_validated_for_relational() {
        let (service, repo) = records();

        for limit in [0, 1001, -5] {
            let err = service.list(Some(limit)).await.unwrap_err();
            assert_eq!(validation(err), ValidationError::LimitOutOfRange);
        }
        assert_eq!(repo.call_count(), 0);

        assert!(service.list(Some(1)).await.is_ok());
        assert!(service.list(Some(1000)).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_relational_newest_first() {
        let (service, _) = records();
        for name in ["a", "b", "c"] {
            service.create(&CreateEntryRequest::new(name)).await.unwrap();
        }

        let listed = service.list(None).await.unwrap();
        let names: Vec<_> = listed.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        assert_eq!(service.list(Some(2)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_key_value_ignores_limit() {
        let (service, _) = items();
        for name in ["a", "b", "c"] {
            service.create(&CreateEntryRequest::new(name)).await.unwrap();
        }

        assert_eq!(service.list(Some(1)).await.unwrap().len(), 3);
        assert_eq!(service.list(Some(5000)).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_relational_update_missing_skips_patch_validation() {
        let (service, repo) = records();

        // An invalid patch is not an error when the entry does not exist.
        let result = service
            .update(&9, &EntryPatch::new().with_name(""))
            .await
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(repo.call_count(), 1);
    }

    #[tokio::test]
    async fn test_relational_update_invalid_patch_persists_nothing() {
        let (service, _) = records();
        service
            .create(&CreateEntryRequest::new("keep").with_value(1))
            .await
            .unwrap();

        let err = service
            .update(&1, &EntryPatch::new().with_name("renamed").with_value(-1))
            .await
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::NegativeValue);

        let stored = service.get(&1).await.unwrap().unwrap();
        assert_eq!(stored.name, "keep");
        assert_eq!(stored.value, 1);
    }

    #[tokio::test]
    async fn test_relational_update_merges_fields() {
        let (service, _) = records();
        let created = service
            .create(
                &CreateEntryRequest::new("name")
                    .with_description("desc")
                    .with_value(5),
            )
            .await
            .unwrap();

        let updated = service
            .update(&1, &EntryPatch::new().with_value(10))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "name");
        assert_eq!(updated.description.as_deref(), Some("desc"));
        assert_eq!(updated.value, 10);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_key_value_update_validates_before_store() {
        let (service, repo) = items();

        let err = service
            .update(&"abc".to_string(), &EntryPatch::new().with_name("  "))
            .await
            .unwrap_err();

        assert_eq!(validation(err), ValidationError::EmptyName);
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_key_value_update_missing_is_none() {
        let (service, repo) = items();

        let result = service
            .update(&"missing".to_string(), &EntryPatch::new().with_value(3))
            .await
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(repo.call_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (service, _) = items();
        let created = service.create(&CreateEntryRequest::new("a")).await.unwrap();
        let id = created.id.unwrap();

        assert!(service.delete(&id).await.unwrap());
        assert!(!service.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_validates_id() {
        let (service, repo) = records();
        let err = service.delete(&-1).await.unwrap_err();
        assert_eq!(validation(err), ValidationError::NonPositiveId);
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let (service, repo) = records();
        repo.fail_with(RepositoryError::QueryFailed("boom".to_string()))
            .await;

        let err = service.list(None).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Repository(RepositoryError::QueryFailed("boom".to_string()))
        );
    }

    #[tokio::test]
    async fn test_initialize_delegates() {
        let (service, repo) = records();
        service.initialize().await.unwrap();
        assert_eq!(repo.call_count(), 1);
    }
}
