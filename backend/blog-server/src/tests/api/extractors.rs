use crate::tests::{cookie_transport, create_test_state};
use crate::{ApiError, CurrentUser, JsonBody, MaybeUser};

use blog_auth::SessionTransport;
use blog_core::User;
use blog_db::UserRepository;

use axum::{
    body::Body,
    extract::{FromRequest, FromRequestParts},
    http::{Request, StatusCode},
};
use serde::Deserialize;
use uuid::Uuid;

async fn insert_user(state: &crate::AppState) -> User {
    let user = User::new(
        "reader@example.com",
        "reader".into(),
        "$argon2id$v=19$m=64,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".into(),
    );
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .unwrap();
    user
}

#[tokio::test]
async fn test_current_user_without_credential_is_unauthorized() {
    let state = create_test_state(cookie_transport()).await;
    let (mut parts, _body) = Request::builder()
        .body(Body::empty())
        .unwrap()
        .into_parts();

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_current_user_with_valid_cookie_resolves_identity() {
    let state = create_test_state(cookie_transport()).await;
    let user = insert_user(&state).await;
    let token = state.tokens.issue(user.id).unwrap();
    let (mut parts, _body) = Request::builder()
        .header("Cookie", format!("theme=dark; token={}", token))
        .body(Body::empty())
        .unwrap()
        .into_parts();

    let CurrentUser(resolved) = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .ok()
        .unwrap();

    assert_eq!(resolved.id, user.id);
}

#[tokio::test]
async fn test_bearer_state_ignores_cookie_credential() {
    let state = create_test_state(SessionTransport::Bearer).await;
    let user = insert_user(&state).await;
    let token = state.tokens.issue(user.id).unwrap();
    let (mut parts, _body) = Request::builder()
        .header("Cookie", format!("token={}", token))
        .body(Body::empty())
        .unwrap()
        .into_parts();

    let MaybeUser(resolved) = MaybeUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_maybe_user_with_unknown_subject_is_anonymous() {
    let state = create_test_state(SessionTransport::Bearer).await;
    let token = state.tokens.issue(Uuid::new_v4()).unwrap();
    let (mut parts, _body) = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
        .into_parts();

    let MaybeUser(resolved) = MaybeUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(resolved.is_none());
}

#[tokio::test]
async fn test_identity_is_resolved_once_per_request() {
    let state = create_test_state(SessionTransport::Bearer).await;
    let user = insert_user(&state).await;
    let token = state.tokens.issue(user.id).unwrap();
    let (mut parts, _body) = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
        .into_parts();

    let MaybeUser(first) = MaybeUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();
    assert!(first.is_some());

    // Once cached, the store is no longer consulted
    state.pool.close().await;

    let CurrentUser(second) = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .ok()
        .unwrap();
    assert_eq!(second.id, user.id);
}

#[tokio::test]
async fn test_current_user_store_failure_is_internal() {
    let state = create_test_state(SessionTransport::Bearer).await;
    let token = state.tokens.issue(Uuid::new_v4()).unwrap();
    state.pool.close().await;
    let (mut parts, _body) = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
        .into_parts();

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[derive(Debug, Deserialize)]
struct Probe {
    #[allow(dead_code)]
    name: String,
}

#[tokio::test]
async fn test_json_body_rejection_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let result = JsonBody::<Probe>::from_request(request, &()).await;

    match result {
        Err(error) => assert_eq!(error.status(), StatusCode::BAD_REQUEST),
        Ok(_) => panic!("malformed body must be rejected"),
    }
}
