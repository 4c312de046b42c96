//! Integration tests for the PostgreSQL backend
//!
//! Run against a real PostgreSQL in testcontainers with the SeaORM
//! migrations applied. Each test gets its own container, so ids start at 1.

use domain_items::*;
use test_utils::{TestDatabase, TestNames, assertions::*};

fn fields(name: String, description: Option<&str>) -> ItemFields {
    ItemFields::new(name, description.map(str::to_string))
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("create_and_get");

    let created = repo
        .create(fields(names.item("main"), Some("first")))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let retrieved = assert_some(repo.get_by_id(created.id).await.unwrap(), "item should exist");
    assert_eq!(retrieved, created, "retrieved item");
}

#[tokio::test]
async fn test_list_is_ordered_and_shrinks_after_delete() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("list_order");

    assert!(repo.list().await.unwrap().is_empty());

    for suffix in ["a", "b", "c"] {
        repo.create(fields(names.item(suffix), None))
            .await
            .unwrap();
    }
    assert!(repo.delete(2).await.unwrap());

    let ids: Vec<i32> = repo.list().await.unwrap().into_iter().map(|m| m.id).collect();
    assert_strictly_increasing(&ids, "listed ids");
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("no_reuse");

    let first = repo
        .create(fields(names.item("first"), None))
        .await
        .unwrap();
    assert!(repo.delete(first.id).await.unwrap());

    let second = repo
        .create(fields(names.item("second"), None))
        .await
        .unwrap();
    assert_strictly_increasing(&[first.id, second.id], "ids across delete");
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("update");

    let created = repo
        .create(fields(names.item("before"), Some("old")))
        .await
        .unwrap();

    let updated = assert_some(
        repo.update(created.id, fields(names.item("after"), None))
            .await
            .unwrap(),
        "update should find the item",
    );
    assert_eq!(updated.name, names.item("after"));
    assert_eq!(updated.description, None);

    let stored = assert_some(repo.get_by_id(created.id).await.unwrap(), "item should exist");
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_unknown_id_creates_nothing() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("update_unknown");

    let result = repo
        .update(404, fields(names.item("ghost"), None))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_items() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("delete_unknown");

    repo.create(fields(names.item("keep"), None))
        .await
        .unwrap();

    assert!(!repo.delete(999).await.unwrap());
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_round_trip_through_postgres() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(PgItemRepository::new(db.connection()));

    let created = service
        .create_item(CreateItem {
            name: "Test".to_string(),
            description: Some("X".to_string()),
        })
        .await
        .unwrap();

    let fetched = assert_some(service.get_item(created.id).await.unwrap(), "item should exist");
    assert_eq!(fetched, created, "service get");

    assert!(service.delete_item(created.id).await.unwrap());
    assert_eq!(service.get_item(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let names = TestNames::new("concurrent");

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let repo = repo.clone();
            let name = names.item(i);
            tokio::spawn(async move { repo.create(fields(name, None)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_strictly_increasing(&ids, "concurrently assigned ids");
    assert_eq!(ids.len(), 10);
}
