use backoffice_store::{EntityStore, ListFilter, RestStore, StoreError};
use backoffice_types::{EntityId, Priority};
use serde::{Deserialize, Serialize};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MenuRecord {
    id: EntityId,
    name: String,
    description: String,
    priority: Priority,
}

fn menu(name: &str, priority: u32) -> MenuRecord {
    MenuRecord {
        id: EntityId::new(),
        name: name.into(),
        description: format!("{name} description"),
        priority: Priority::new(priority),
    }
}

fn store(server: &MockServer) -> RestStore<MenuRecord> {
    RestStore::new(server.uri(), "menus")
}

// ── create ──────────────────────────────────────────────────────

#[tokio::test]
async fn create_posts_record_and_returns_id() {
    let server = MockServer::start().await;
    let assigned = EntityId::new();
    let record = menu("Plat du jour", 0);

    Mock::given(method("POST"))
        .and(path("/menus"))
        .and(body_json(serde_json::to_value(&record).unwrap()))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "id": assigned.to_string() })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let id = store(&server).create(&record).await.unwrap();
    assert_eq!(id, assigned);
}

#[tokio::test]
async fn create_surfaces_server_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = store(&server).create(&menu("Plat", 0)).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { code: 500 }));
}

// ── update ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_puts_partial_fields_only() {
    let server = MockServer::start().await;
    let id = EntityId::new();

    Mock::given(method("PUT"))
        .and(path(format!("/menus/{id}")))
        .and(body_json(serde_json::json!({ "priority": 3 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store(&server)
        .update(id, serde_json::json!({ "priority": 3 }))
        .await
        .unwrap();
}

#[tokio::test]
async fn update_rejects_non_object_patch() {
    let server = MockServer::start().await;
    let err = store(&server)
        .update(EntityId::new(), serde_json::json!(42))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidPatch(_)));
}

#[tokio::test]
async fn update_surfaces_not_found_status() {
    let server = MockServer::start().await;
    let id = EntityId::new();
    Mock::given(method("PUT"))
        .and(path(format!("/menus/{id}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = store(&server)
        .update(id, serde_json::json!({ "priority": 1 }))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Status { code: 404 }));
}

// ── delete ──────────────────────────────────────────────────────

#[tokio::test]
async fn delete_targets_record_route() {
    let server = MockServer::start().await;
    let id = EntityId::new();
    Mock::given(method("DELETE"))
        .and(path(format!("/menus/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    store(&server).delete(id).await.unwrap();
}

// ── list ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_fetches_collection() {
    let server = MockServer::start().await;
    let records = vec![menu("Entrées", 0), menu("Plats", 1)];

    Mock::given(method("GET"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&records))
        .mount(&server)
        .await;

    let fetched = store(&server).list(ListFilter::all()).await.unwrap();
    assert_eq!(fetched, records);
}

#[tokio::test]
async fn list_passes_filter_as_query_params() {
    let server = MockServer::start().await;
    let restaurant = EntityId::new();

    Mock::given(method("GET"))
        .and(path("/menus"))
        .and(query_param("lang", "fr"))
        .and(query_param("restaurant", restaurant.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<MenuRecord>::new()))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ListFilter::all().with_lang("fr").with_restaurant(restaurant);
    let fetched = store(&server).list(filter).await.unwrap();
    assert!(fetched.is_empty());
}

#[tokio::test]
async fn list_surfaces_server_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store(&server).list(ListFilter::all()).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { code: 503 }));
}
