use crate::ApiError;

use blog_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_message_only() {
    let (status, json) = body_json(ApiError::not_found("Post not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "message": "Post not found" }));
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::Validation {
        message: "title cannot be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "title cannot be empty");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let (status, json) = body_json(ApiError::internal("connection refused at 10.0.0.3")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Server error");
}

#[tokio::test]
async fn test_status_codes_per_kind() {
    assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
    assert_eq!(ApiError::forbidden().status(), StatusCode::FORBIDDEN);
    assert_eq!(ApiError::conflict("x").status(), StatusCode::CONFLICT);
}

#[test]
fn test_uuid_error_maps_to_validation() {
    let error: ApiError = uuid::Uuid::parse_str("not-a-uuid").unwrap_err().into();

    assert!(matches!(error, ApiError::Validation { .. }));
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_core_validation_keeps_message() {
    let error: ApiError = CoreError::validation("username", "username cannot be empty").into();

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "username cannot be empty");
            assert_eq!(field.as_deref(), Some("username"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_invalid_credential_maps_to_unauthorized() {
    let error: ApiError = blog_auth::AuthError::InvalidCredential {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}
