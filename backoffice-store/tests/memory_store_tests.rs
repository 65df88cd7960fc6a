use backoffice_store::{EntityStore, ListFilter, MemoryStore, StoreError};
use backoffice_types::{EntityId, Priority};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MenuRecord {
    id: EntityId,
    name: String,
    priority: Priority,
    restaurant: Option<EntityId>,
}

fn menu(name: &str, priority: u32) -> MenuRecord {
    MenuRecord {
        id: EntityId::new(),
        name: name.into(),
        priority: Priority::new(priority),
        restaurant: None,
    }
}

#[tokio::test]
async fn create_assigns_fresh_id() {
    let store = MemoryStore::new();
    let a = store.create(&menu("Entrées", 0)).await.unwrap();
    let b = store.create(&menu("Plats", 1)).await.unwrap();
    assert_ne!(a, b);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn update_merges_patch_into_record() {
    let store = MemoryStore::new();
    let record = menu("Entrées", 0);
    let id = record.id;
    store.insert(id, record).await;

    store
        .update(id, serde_json::json!({ "priority": 5 }))
        .await
        .unwrap();

    let records = store.list(ListFilter::all()).await.unwrap();
    assert_eq!(records[0].priority, Priority::new(5));
    assert_eq!(records[0].name, "Entrées");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store: MemoryStore<MenuRecord> = MemoryStore::new();
    let err = store
        .update(EntityId::new(), serde_json::json!({ "priority": 1 }))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn update_log_preserves_issuance_order() {
    let store = MemoryStore::new();
    let a = menu("A", 0);
    let b = menu("B", 1);
    let (id_a, id_b) = (a.id, b.id);
    store.insert(id_a, a).await;
    store.insert(id_b, b).await;

    store
        .update(id_b, serde_json::json!({ "priority": 0 }))
        .await
        .unwrap();
    store
        .update(id_a, serde_json::json!({ "priority": 1 }))
        .await
        .unwrap();

    let log = store.update_log().await;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, id_b);
    assert_eq!(log[1].0, id_a);
}

#[tokio::test]
async fn injected_failure_rejects_update_but_logs_it() {
    let store = MemoryStore::new();
    let record = menu("Entrées", 0);
    let id = record.id;
    store.insert(id, record).await;
    store.fail_updates_for(id).await;

    let err = store
        .update(id, serde_json::json!({ "priority": 9 }))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Injected(_)));

    // The failed write was still issued, and the record kept its value.
    assert_eq!(store.update_log().await.len(), 1);
    let records = store.list(ListFilter::all()).await.unwrap();
    assert_eq!(records[0].priority, Priority::new(0));
}

#[tokio::test]
async fn delete_removes_record() {
    let store = MemoryStore::new();
    let record = menu("Entrées", 0);
    let id = record.id;
    store.insert(id, record).await;

    store.delete(id).await.unwrap();
    assert!(store.is_empty().await);

    let err = store.delete(id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn list_scopes_by_restaurant() {
    let store = MemoryStore::new();
    let owner = EntityId::new();
    let mut mine = menu("Entrées", 0);
    mine.restaurant = Some(owner);
    let theirs = menu("Plats", 1);
    store.insert(mine.id, mine.clone()).await;
    store.insert(theirs.id, theirs).await;

    let scoped = store
        .list(ListFilter::all().with_restaurant(owner))
        .await
        .unwrap();
    assert_eq!(scoped, vec![mine]);
}
