//! Route-level tests: the full router driven through tower's oneshot.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use manufactory::{common_routes, entity_routes, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let pool = common::test_pool().await;
    let state = AppState { pool };
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_and_version_respond() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "manufactory");
}

#[tokio::test]
async fn plant_crud_over_http() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/plants",
        Some(json!({"name": "Green Valley Plant", "location": "Springfield, IL", "capacity": 1000})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Green Valley Plant");

    let (status, body) = send(&app, "GET", "/plants", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 1);
    assert_eq!(body["data"][0]["name"], "Green Valley Plant");

    let (status, body) = send(&app, "GET", "/plants/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["capacity"], 1000);

    let (status, body) = send(&app, "PUT", "/plants/1", Some(json!({"capacity": 1100}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["capacity"], 1100);
    assert_eq!(body["data"]["name"], "Green Valley Plant");
    assert_eq!(body["data"]["location"], "Springfield, IL");

    let (status, body) = send(&app, "DELETE", "/plants/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], true);
    assert_eq!(body["data"]["id"], 1);

    let (status, body) = send(&app, "GET", "/plants/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn duplicate_name_is_409() {
    let app = app().await;
    let input = json!({"name": "Herbal Tea", "category": "Beverage", "price": 5.99});
    let (status, _) = send(&app, "POST", "/products", Some(input.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/products", Some(input)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn dangling_reference_is_400() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/plant-products",
        Some(json!({"plant_id": 1, "product_id": 1, "quantity": 200.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_reference");
}

#[tokio::test]
async fn join_row_created_when_parents_exist() {
    let app = app().await;
    send(
        &app,
        "POST",
        "/plants",
        Some(json!({"name": "Green Valley Plant"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/products",
        Some(json!({"name": "Herbal Tea", "category": "Beverage", "price": 5.99})),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/plant-products",
        Some(json!({"plant_id": 1, "product_id": 1, "quantity": 200.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["plant_id"], 1);
    assert_eq!(body["data"]["product_id"], 1);
}

#[tokio::test]
async fn unknown_id_is_404_for_update_and_delete() {
    let app = app().await;
    let (status, body) = send(&app, "PUT", "/materials/99", Some(json!({"cost": 3.0}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, body) = send(&app, "DELETE", "/orders/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn empty_required_field_is_400() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/plants", Some(json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn delete_with_dependents_is_409_over_http() {
    let app = app().await;
    send(
        &app,
        "POST",
        "/materials",
        Some(json!({"name": "Chamomile", "unit": "grams", "cost": 2.5})),
    )
    .await;
    send(
        &app,
        "POST",
        "/storage-materials",
        Some(json!({"material_id": 1, "quantity": 150})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/materials/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");
}
