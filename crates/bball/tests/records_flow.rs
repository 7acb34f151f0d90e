//! Records handler and relational service over an in-memory SQLite database.

use std::sync::Arc;

use serde_json::json;

use bball::storage::SqliteRepository;
use bball::{EntryService, RecordsHandler, ServiceError};
use bball_core::entry::{CreateEntryRequest, EntryPatch, ValidationError};

fn service() -> EntryService<i64> {
    EntryService::new(Arc::new(SqliteRepository::in_memory()))
}

#[tokio::test]
async fn test_invoke_bootstraps_and_creates_defaults() {
    let handler = RecordsHandler::new(service());

    let response = handler.invoke(&json!({})).await;
    let body = response.body_json().unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(body["message"], "Entry created successfully");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Test Entry");
    assert_eq!(body["data"]["description"], "Mock test entry");
    assert_eq!(body["data"]["value"], 42);
    assert_eq!(body["data"]["created_at"], body["data"]["updated_at"]);
}

#[tokio::test]
async fn test_invoke_is_repeatable() {
    let handler = RecordsHandler::new(service());

    let first = handler.invoke(&json!({"name": "one"})).await;
    let second = handler.invoke(&json!({"name": "two", "value": 0})).await;

    assert_eq!(first.body_json().unwrap()["data"]["id"], 1);
    let second = second.body_json().unwrap();
    assert_eq!(second["data"]["id"], 2);
    assert_eq!(second["data"]["value"], 0);
}

#[tokio::test]
async fn test_negative_value_is_rejected() {
    let handler = RecordsHandler::new(service());

    let response = handler.invoke(&json!({"value": -1})).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body_json().unwrap()["error"],
        "Value must be non-negative"
    );
}

#[tokio::test]
async fn test_handle_without_bootstrap_is_500() {
    let handler = RecordsHandler::new(service());

    let response = handler.handle(&json!({})).await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body_json().unwrap(),
        json!({"error": "Internal server error"})
    );
}

#[tokio::test]
async fn test_relational_lifecycle() {
    let service = service();
    service.initialize().await.unwrap();

    let created = service
        .create(
            &CreateEntryRequest::new(" Test ")
                .with_description(" desc ")
                .with_value(42),
        )
        .await
        .unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.name, "Test");
    assert_eq!(created.description.as_deref(), Some("desc"));

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = service
        .update(&id, &EntryPatch::new().with_value(10))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.value, 10);
    assert_eq!(updated.name, "Test");
    assert_eq!(updated.description.as_deref(), Some("desc"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    assert_eq!(service.get(&id).await.unwrap(), Some(updated));
    assert!(service.delete(&id).await.unwrap());
    assert_eq!(service.get(&id).await.unwrap(), None);
    assert!(!service.delete(&id).await.unwrap());
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let service = service();
    service.initialize().await.unwrap();
    for name in ["first", "second", "third"] {
        service.create(&CreateEntryRequest::new(name)).await.unwrap();
    }

    let listed = service.list(None).await.unwrap();
    let names: Vec<_> = listed.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);

    assert_eq!(service.list(Some(1)).await.unwrap().len(), 1);
    assert_eq!(
        service.list(Some(0)).await.unwrap_err(),
        ServiceError::Validation(ValidationError::LimitOutOfRange)
    );
}

#[tokio::test]
async fn test_update_missing_entry_is_none() {
    let service = service();
    service.initialize().await.unwrap();

    let result = service
        .update(&123, &EntryPatch::new().with_name("x"))
        .await
        .unwrap();

    assert_eq!(result, None);
}
