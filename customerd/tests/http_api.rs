//! HTTP adapter tests — no database required.
//!
//! The pool is created lazily and invalid requests are rejected before any
//! query runs, so these exercise parameter handling and error sanitization
//! only. Store behavior is covered in `pg_customers.rs`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use customerd::AppState;
use customerd::api;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

fn test_app() -> Router {
    // Nothing listens behind this URL; rejected requests never touch it
    let pool = PgPool::connect_lazy("postgres://localhost:1/unreachable").expect("lazy pool");
    api::create_router(AppState::with_pool(pool))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn save_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/customers.save")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn get_by_id_rejects_unparseable_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/customers.getById?id=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Bad Request");
}

#[tokio::test]
async fn get_by_id_rejects_missing_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/customers.getById")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn block_rejects_unparseable_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/customers.blockById?id=12abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn remove_rejects_missing_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/customers.removeById")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn save_rejects_empty_name_and_phone() {
    let response = test_app()
        .oneshot(save_request("id=0&name=&phone="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Bad Request");
}

#[tokio::test]
async fn save_rejects_missing_id() {
    let response = test_app()
        .oneshot(save_request("name=Alice&phone=%2B1000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn save_rejects_unparseable_id() {
    let response = test_app()
        .oneshot(save_request("id=abc&name=Alice&phone=%2B1000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn save_reads_query_params_on_get() {
    // GET form extraction falls back to the query string; validation still
    // rejects the empty name/phone pair before any query runs
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/customers.save?id=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_is_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "customerd");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/customers.frobnicate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
