use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    routing::get,
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use notebooks_api::{
    config::AppConfig,
    routes::{app, with_layers},
    state::AppState,
};

// None of these requests reach the database; an unscripted mock would fail
// any query that did.
fn mock_app() -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    app(AppState::new(AppConfig::default(), db))
}

async fn json_response(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = mock_app()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

#[tokio::test]
async fn unknown_route_is_normalized_to_json_error() {
    let (status, json) = json_response(
        Request::builder()
            .uri("/unknown-route")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], StatusCode::NOT_FOUND.as_u16());
    assert!(!json["message"].as_str().unwrap_or("").is_empty());
}

#[tokio::test]
async fn malformed_notebook_id_is_rejected_as_json() {
    let (status, json) = json_response(
        Request::builder()
            .uri("/notebooks/123/notes")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn malformed_json_body_is_rejected_as_json() {
    let (status, json) = json_response(
        Request::builder()
            .method("POST")
            .uri(format!("/notebooks/{}/notes", Uuid::new_v4()))
            .header("content-type", "application/json")
            .body(Body::from("{\"contents\":"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn missing_content_type_is_rejected_as_json() {
    let (status, json) = json_response(
        Request::builder()
            .method("POST")
            .uri(format!("/notebooks/{}/notes", Uuid::new_v4()))
            .body(Body::from(json!({ "contents": "New Note" }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["status"], 415);
}

#[tokio::test]
async fn unsupported_method_is_rejected_as_json() {
    let (status, json) = json_response(
        Request::builder()
            .method("PATCH")
            .uri("/notebooks")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["status"], 405);
}

async fn explode() -> &'static str {
    panic!("note renderer blew up");
}

#[tokio::test]
async fn handler_panic_becomes_json_internal_error() {
    let app = with_layers(Router::new().route("/explode", get(explode)));

    let response = app
        .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    assert_eq!(json["status"], 500);
    assert!(
        json["message"]
            .as_str()
            .unwrap_or("")
            .starts_with("internal server error")
    );
}
