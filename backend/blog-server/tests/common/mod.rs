#![allow(dead_code)]

//! Test infrastructure for blog-server API tests

use blog_auth::{
    CookieSettings, HashParams, PasswordHasher, SESSION_TTL, SameSite, SessionTransport,
    TokenService,
};
use blog_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header::SET_COOKIE},
};
use http::HeaderValue;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes-min";
pub const PASSWORD: &str = "secret123";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    blog_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn cookie_transport() -> SessionTransport {
    SessionTransport::Cookie(CookieSettings {
        name: "token".into(),
        path: "/".into(),
        secure: false,
        same_site: SameSite::Lax,
        max_age: SESSION_TTL,
    })
}

/// Create AppState for testing with cheap hashing parameters
pub async fn create_test_app_state(transport: SessionTransport) -> AppState {
    AppState {
        pool: create_test_pool().await,
        tokens: Arc::new(TokenService::with_hs256(TEST_SECRET).unwrap()),
        hasher: Arc::new(
            PasswordHasher::with_params(HashParams {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            })
            .unwrap(),
        ),
        transport: Arc::new(transport),
        allowed_origins: Arc::new(vec![HeaderValue::from_static("http://localhost:5173")]),
    }
}

/// Credential presented by a client
#[derive(Debug, Clone)]
pub enum Session {
    Anonymous,
    Cookie(String),
    Bearer(String),
}

impl Session {
    fn apply(&self, builder: http::request::Builder) -> http::request::Builder {
        match self {
            Session::Anonymous => builder,
            Session::Cookie(token) => builder.header("Cookie", format!("token={}", token)),
            Session::Bearer(token) => builder.header("Authorization", format!("Bearer {}", token)),
        }
    }
}

/// Response status, headers and parsed JSON body (Null when empty or not JSON)
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// Session token delivered by the cookie carrier
    pub fn cookie_token(&self) -> Option<String> {
        self.set_cookie()?
            .split(';')
            .next()?
            .strip_prefix("token=")
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    session: &Session,
    body: Option<Value>,
) -> TestResponse {
    let builder = session.apply(Request::builder().method(method).uri(uri));
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Register a user and return the response
pub async fn register(app: &Router, email: &str, username: &str) -> TestResponse {
    send(
        app,
        "POST",
        "/auth/register",
        &Session::Anonymous,
        Some(json!({ "email": email, "password": PASSWORD, "username": username })),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    send(
        app,
        "POST",
        "/auth/login",
        &Session::Anonymous,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Register under the cookie carrier and return the session
pub async fn cookie_session(app: &Router, email: &str, username: &str) -> (Session, Value) {
    let response = register(app, email, username).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let token = response.cookie_token().expect("register must set a cookie");
    (Session::Cookie(token), response.json["user"].clone())
}

/// Register under the bearer carrier and return the session
pub async fn bearer_session(app: &Router, email: &str, username: &str) -> (Session, Value) {
    let response = register(app, email, username).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let token = response.json["token"]
        .as_str()
        .expect("register must return a token")
        .to_string();
    (Session::Bearer(token), response.json["user"].clone())
}

pub fn app(state: AppState) -> Router {
    build_router(state)
}
