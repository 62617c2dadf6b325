//! REST surface tests against the router

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use hive_hub::api::http::create_router;
use hive_hub::api::websocket::state::AppState;
use hive_hub::config::HubConfig;
use serde_json::Value;
use tower::util::ServiceExt;

fn app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(HubConfig::default()));
    let router = create_router(Arc::clone(&state));
    (state, router)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_notify(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/notify")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn notify_acknowledges_with_record_id() {
    let (_state, router) = app();

    let response = router
        .oneshot(post_notify(r#"{"user_id":"u1","message":"New post"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ack = body_json(response).await;
    assert_eq!(ack["status"], "success");
    assert!(ack["id"].is_string());
}

#[tokio::test]
async fn notify_with_empty_message_is_rejected() {
    let (state, router) = app();

    let response = router
        .oneshot(post_notify(r#"{"user_id":"u1","message":""}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert_eq!(error["code"], "BAD_REQUEST");
    // Rejection did not mutate the store
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn notify_without_owner_files_as_broadcast() {
    let (state, router) = app();

    let response = router
        .oneshot(post_notify(r#"{"message":"maintenance at noon"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let records = state.notifications.list_for("");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "maintenance at noon");
}

#[tokio::test]
async fn notifications_listed_in_creation_order() {
    let (state, router) = app();
    state.notifications.append("u1", "first").unwrap();
    state.notifications.append("u2", "second").unwrap();
    state.notifications.append("u1", "third").unwrap();

    let response = router.oneshot(get("/notifications")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    let messages: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, ["first", "second", "third"]);
}

#[tokio::test]
async fn owner_scoped_listing_filters_records() {
    let (state, router) = app();
    state.notifications.append("u1", "for u1").unwrap();
    state.notifications.append("u2", "for u2").unwrap();

    let response = router
        .clone()
        .oneshot(get("/notifications/u1"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["user_id"], "u1");
    assert_eq!(body["data"][0]["message"], "for u1");

    let response = router.oneshot(get("/notifications/nobody")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn record_shape_matches_wire_contract() {
    let (_state, router) = app();

    router
        .clone()
        .oneshot(post_notify(r#"{"user_id":"u1","message":"hello"}"#))
        .await
        .unwrap();

    let response = router.oneshot(get("/notifications")).await.unwrap();
    let body = body_json(response).await;
    let record = &body["data"][0];
    assert!(record["id"].is_string());
    assert_eq!(record["user_id"], "u1");
    assert_eq!(record["message"], "hello");
    // ISO-8601 timestamp
    let ts = record["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn stats_reflect_store_contents() {
    let (state, router) = app();
    state.notifications.append("u1", "one").unwrap();

    let response = router.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["rooms"], 0);
    assert_eq!(body["data"]["connections"], 0);
    assert_eq!(body["data"]["notifications"], 1);
}

#[tokio::test]
async fn health_check_responds_ok() {
    let (_state, router) = app();
    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
