//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against the memory backend.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use category_cache::{api::create_router, AppState, CacheHandle, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

async fn create_test_app() -> Router {
    let config = Config {
        activated: true,
        url: "memory://".to_string(),
        ..Config::default()
    };
    let cache = CacheHandle::create(&config).await;
    assert!(cache.is_enabled());
    create_router(AppState::new(cache))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == Single Key Tests ==

#[tokio::test]
async fn test_set_then_get_string() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/cache/users/1", json!({"value": "alice"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stored"], true);

    let response = app
        .oneshot(empty_request("GET", "/cache/users/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["category"], "users");
    assert_eq!(json["key"], "1");
    assert_eq!(json["value"], "alice");
}

#[tokio::test]
async fn test_number_type_is_preserved() {
    let app = create_test_app().await;

    app.clone()
        .oneshot(json_request("PUT", "/cache/users/2", json!({"value": 42})))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/cache/users/2"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"], json!(42));
}

#[tokio::test]
async fn test_structured_value_with_expiration() {
    let app = create_test_app().await;
    let value = json!({
        "key1": "value1",
        "key2": 10,
        "key3": {"array1": [1, 2, 3, {"key4": "value4"}]}
    });

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/cache/tests/test3",
            json!({"value": value.clone(), "expiration": 60}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("GET", "/cache/tests/test3"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"], value);
    assert_eq!(json["value"]["key3"]["array1"][3]["key4"], "value4");
}

#[tokio::test]
async fn test_get_not_found() {
    let app = create_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/cache/users/nonexistent"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn test_delete_then_lookup_reports_missing() {
    let app = create_test_app().await;

    app.clone()
        .oneshot(json_request("PUT", "/cache/users/9", json!({"value": "gone"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/cache/users/9"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["deleted"], true);

    let response = app
        .oneshot(json_request("POST", "/batch/users", json!({"keys": ["9"]})))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["missing"], json!(["9"]));
}

#[tokio::test]
async fn test_delete_absent_key_is_acknowledged() {
    let app = create_test_app().await;

    let response = app
        .oneshot(empty_request("DELETE", "/cache/users/never-set"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["deleted"], true);
}

#[tokio::test]
async fn test_invalid_category_rejected() {
    let app = create_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/cache/users:admin/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Batch Tests ==

#[tokio::test]
async fn test_batch_set_and_lookup() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/batch/tests",
            json!({"values": {"multi1": "myvalue", "multi2": 10, "multi3": {"key1": "value1"}}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stored"], true);
    assert_eq!(json["count"], 3);

    let response = app
        .oneshot(json_request(
            "POST",
            "/batch/tests",
            json!({"keys": ["multi1", "multi2", "multi3", "multi4", "multi5"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json["found"],
        json!({"multi1": "myvalue", "multi2": 10, "multi3": {"key1": "value1"}})
    );
    assert_eq!(json["missing"], json!(["multi4", "multi5"]));
}

#[tokio::test]
async fn test_batch_set_empty_key_rejected() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/batch/tests", json!({"values": {"": 1}})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_lookup_empty_key_rejected() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request("POST", "/batch/users", json!({"keys": ["1", ""]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_set_with_huge_expiration() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/cache/users/1",
            json!({"value": 1, "expiration": u64::MAX}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stored"], true);

    let response = app
        .oneshot(empty_request("GET", "/cache/users/1"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"], json!(1));
}

#[tokio::test]
async fn test_batch_set_empty_map() {
    let app = create_test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/batch/tests", json!({"values": {}})))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stored"], true);
    assert_eq!(json["count"], 0);
}

// == Health / Disabled Tests ==

#[tokio::test]
async fn test_health_reports_cache_state() {
    let app = create_test_app().await;

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["cache_enabled"], true);
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_disabled_cache_routes() {
    let cache = CacheHandle::create(&Config::default()).await;
    let app = create_router(AppState::new(cache));

    let response = app
        .clone()
        .oneshot(json_request("POST", "/batch/users", json!({"keys": ["1"]})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["cache_enabled"], false);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cache/users/1")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
