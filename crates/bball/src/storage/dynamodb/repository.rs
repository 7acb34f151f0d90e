//! DynamoDB repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use uuid::Uuid;

use bball_core::entry::{EntryPatch, ItemEntry};
use bball_core::storage::{EntryRepository, Result, StorageKind};

use super::client::DynamoDbClientProvider;
use super::conversions::{entry_to_item, item_to_entry, ATTR_ID};
use super::error::{
    is_conditional_check_failed, map_delete_item_error, map_get_item_error, map_put_item_error,
    map_scan_error, map_update_item_error,
};
use super::expressions::{build_update_expression, item_exists_condition};

/// Key-value entry repository backed by a single DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    provider: Arc<DynamoDbClientProvider>,
    table_name: String,
}

impl DynamoDbRepository {
    pub fn new(provider: Arc<DynamoDbClientProvider>, table_name: impl Into<String>) -> Self {
        Self {
            provider,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl EntryRepository<String> for DynamoDbRepository {
    fn kind(&self) -> StorageKind {
        StorageKind::KeyValue
    }

    async fn create(&self, entry: &ItemEntry) -> Result<ItemEntry> {
        let now = Utc::now();
        let id = entry
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let stored = ItemEntry {
            id: Some(id.clone()),
            description: None,
            created_at: Some(entry.created_at.unwrap_or(now)),
            updated_at: Some(now),
            ..entry.clone()
        };
        let item = entry_to_item(&stored)?;

        self.provider
            .client()
            .await
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, id.clone()))?;

        tracing::debug!(id = %id, table = %self.table_name, "Put entry");
        Ok(stored)
    }

    async fn get_by_id(&self, id: &String) -> Result<Option<ItemEntry>> {
        let result = self
            .provider
            .client()
            .await
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_entry(&item)?)),
            None => Ok(None),
        }
    }

    /// Full table scan following `LastEvaluatedKey`. `limit` is ignored and
    /// the order is whatever DynamoDB returns.
    async fn get_all(&self, _limit: Option<usize>) -> Result<Vec<ItemEntry>> {
        let client = self.provider.client().await;
        let mut entries = Vec::new();
        let mut start_key = None;

        loop {
            let page = client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in page.items.unwrap_or_default() {
                entries.push(item_to_entry(&item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(entries)
    }

    async fn update(&self, id: &String, patch: &EntryPatch) -> Result<Option<ItemEntry>> {
        let update = build_update_expression(patch, Utc::now());

        let result = self
            .provider
            .client()
            .await
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .update_expression(&update.expression)
            .condition_expression(item_exists_condition())
            .set_expression_attribute_names(update.names_or_none())
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output
                .attributes
                .map(|attributes| item_to_entry(&attributes))
                .transpose(),
            Err(err) if is_conditional_check_failed(&err) => Ok(None),
            Err(err) => Err(map_update_item_error(err)),
        }
    }

    async fn delete(&self, id: &String) -> Result<bool> {
        let output = self
            .provider
            .client()
            .await
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(output
            .attributes
            .is_some_and(|attributes| !attributes.is_empty()))
    }
}
