//! End-to-end router tests against a throwaway data directory.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use report_api::app;
use report_api::config::{AppEnv, Config};
use report_api::state::AppState;

fn test_router(dir: &TempDir) -> Router {
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        app_env: AppEnv::Development,
        data_dir: dir.path().to_path_buf(),
        reports_cors_origins: vec!["http://localhost:4200".to_string()],
    };
    app::build_router(AppState::new(config.data_dir.clone()), &config)
}

fn write(dir: &TempDir, name: &str, body: &str) {
    std::fs::write(dir.path().join(name), body).unwrap();
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn report_exact_match_is_returned_verbatim() {
    let dir = TempDir::new().unwrap();
    write(&dir, "datacredito_42.json", r#"{"score": 710, "id": "42"}"#);

    let (status, body) = get_json(test_router(&dir), "/reports/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"score": 710, "id": "42"}));
}

#[tokio::test]
async fn report_falls_back_to_first_sorted_suffix() {
    let dir = TempDir::new().unwrap();
    write(&dir, "datacredito_42_b.json", r#"{"rev": "b"}"#);
    write(&dir, "datacredito_42_a.json", r#"{"rev": "a"}"#);

    let (status, body) = get_json(test_router(&dir), "/reports/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"rev": "a"}));
}

#[tokio::test]
async fn report_not_found_names_the_id() {
    let dir = TempDir::new().unwrap();

    let (status, body) = get_json(test_router(&dir), "/reports/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        json!("No report found for id 99")
    );
}

#[tokio::test]
async fn malformed_report_is_a_generic_500() {
    let dir = TempDir::new().unwrap();
    write(&dir, "datacredito_42.json", "not json at all");

    let (status, body) = get_json(test_router(&dir), "/reports/42").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], json!("internal server error"));
}

#[tokio::test]
async fn users_without_filter_come_back_in_file_order() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "users.json",
        r#"[{"id":2,"active":false},{"id":1,"active":true}]"#,
    );

    let (status, body) = get_json(test_router(&dir), "/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id":2,"active":false},{"id":1,"active":true}])
    );
}

#[tokio::test]
async fn users_active_filter_splits_the_collection() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "users.json",
        r#"[{"id":1,"active":true},{"id":2,"active":false}]"#,
    );

    let (status, body) = get_json(test_router(&dir), "/v1/users?active=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id":1,"active":true}]));

    let (status, body) = get_json(test_router(&dir), "/v1/users?active=false").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id":2,"active":false}]));
}

#[tokio::test]
async fn users_unknown_active_value_is_a_400() {
    let dir = TempDir::new().unwrap();
    write(&dir, "users.json", "[]");

    let (status, body) = get_json(test_router(&dir), "/v1/users?active=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_ACTIVE"));
}

#[tokio::test]
async fn missing_users_file_is_a_generic_500() {
    let dir = TempDir::new().unwrap();

    let (status, body) = get_json(test_router(&dir), "/v1/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], json!("internal server error"));
}

#[tokio::test]
async fn health_is_alive() {
    let dir = TempDir::new().unwrap();

    let (status, body) = get_json(test_router(&dir), "/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn reports_cors_allows_the_configured_origin_only() {
    let dir = TempDir::new().unwrap();
    write(&dir, "datacredito_42.json", "{}");

    let allowed = test_router(&dir)
        .oneshot(
            Request::builder()
                .uri("/reports/42")
                .header(header::ORIGIN, "http://localhost:4200")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("http://localhost:4200")
    );

    let denied = test_router(&dir)
        .oneshot(
            Request::builder()
                .uri("/reports/42")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(
        denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
