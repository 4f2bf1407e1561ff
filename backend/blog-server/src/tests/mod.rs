mod api;

use crate::AppState;

use blog_auth::{
    CookieSettings, HashParams, PasswordHasher, SESSION_TTL, SameSite, SessionTransport,
    TokenService,
};

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-at-least-32-bytes!!";

pub(crate) fn cookie_transport() -> SessionTransport {
    SessionTransport::Cookie(CookieSettings {
        name: "token".into(),
        path: "/".into(),
        secure: false,
        same_site: SameSite::Lax,
        max_age: SESSION_TTL,
    })
}

pub(crate) async fn create_test_pool() -> SqlitePool {
    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    blog_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) async fn create_test_state(transport: SessionTransport) -> AppState {
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
        allowed_origins: Arc::new(vec![]),
    }
}
