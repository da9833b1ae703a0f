//! Router and request helpers for handler tests.

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use feast_sessions::SigningKeyPair;
use feast_storage::RocksDbStorage;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::{create_router, state::AppState};

const SIGNING_PRIVATE: &[u8] =
    include_bytes!("../../../feast-sessions/tests/fixtures/signing_private.pem");
const SIGNING_PUBLIC: &[u8] =
    include_bytes!("../../../feast-sessions/tests/fixtures/signing_public.pem");

/// Helper to create test state over a throwaway database
pub fn create_test_state() -> Arc<AppState> {
    let storage = Arc::new(RocksDbStorage::open_test().unwrap());
    let keys = SigningKeyPair::from_pem(SIGNING_PRIVATE, SIGNING_PUBLIC).unwrap();
    Arc::new(AppState::from_parts(storage, keys, 16))
}

pub fn create_test_app() -> Router {
    create_router(create_test_state())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn error_code(&self) -> &str {
        self.headers
            .get("X-Error-Code")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form(method: &str, uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn signup(app: &Router, acct: &str, fullname: &str, pwd: &str) {
    let body = format!(
        "acct={}&fullname={}&pwd={}",
        acct,
        fullname.replace(' ', "+"),
        pwd
    );
    let response = send(app, form("POST", "/api/v1/user", &body, None)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
}

pub async fn login(app: &Router, acct: &str, pwd: &str) -> String {
    let body = format!("acct={}&pwd={}", acct, pwd);
    let response = send(app, form("POST", "/api/v1/login", &body, None)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.json()["token"].as_str().unwrap().to_string()
}
