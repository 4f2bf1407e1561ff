//! Registration, login and session handlers

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, CurrentUser, IsAuthResponse, JsonBody,
    LoginRequest, MaybeUser, MessageResponse, RegisterRequest, UpdateProfileRequest, UserDto,
    UserResponse,
};

use blog_core::User;
use blog_db::{DbError, UserRepository};

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
};

const MISSING_FIELDS: &str = "Missing fields";
const EMAIL_TAKEN: &str = "Email already registered";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Present and not blank
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Issue a credential for `user` and hand it to the transport
fn start_session(state: &AppState, user: User) -> ApiResult<(HeaderMap, AuthResponse)> {
    let token = state.tokens.issue(user.id)?;

    let mut headers = HeaderMap::new();
    if let Some(cookie) = state.transport.deliver(&token)? {
        headers.insert(SET_COOKIE, cookie);
    }

    let token = state.transport.token_in_body().then_some(token);

    Ok((
        headers,
        AuthResponse {
            user: user.into(),
            token,
        },
    ))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, HeaderMap, Json<AuthResponse>)> {
    let (Some(email), Some(password), Some(username)) = (
        required(req.email),
        req.password.filter(|p| !p.is_empty()),
        required(req.username),
    ) else {
        return Err(ApiError::bad_request(MISSING_FIELDS));
    };

    let repo = UserRepository::new(state.pool.clone());
    if repo.count_by_email(&email).await? > 0 {
        return Err(ApiError::conflict(EMAIL_TAKEN));
    }

    let hasher = state.hasher.clone();
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    let user = User::new(&email, username.trim().to_string(), password_hash);
    match repo.create(&user).await {
        Ok(()) => {}
        // Lost a race with a concurrent registration
        Err(DbError::UniqueViolation { .. }) => return Err(ApiError::conflict(EMAIL_TAKEN)),
        Err(e) => return Err(e.into()),
    }

    log::info!("Registered user {}", user.id);

    let (headers, body) = start_session(&state, user)?;
    Ok((StatusCode::CREATED, headers, Json(body)))
}

/// POST /auth/login
///
/// Unknown email and wrong password are indistinguishable to the caller,
/// in body and in hashing time.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<(HeaderMap, Json<AuthResponse>)> {
    let (Some(email), Some(password)) =
        (required(req.email), req.password.filter(|p| !p.is_empty()))
    else {
        return Err(ApiError::bad_request(MISSING_FIELDS));
    };

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.find_by_email(&email).await?;

    let hasher = state.hasher.clone();
    let (user, verified) = tokio::task::spawn_blocking(move || match user {
        Some(user) => {
            let verified = hasher.verify(&password, &user.password_hash);
            (Some(user), verified)
        }
        None => (None, hasher.verify_dummy(&password)),
    })
    .await?;

    let user = match user {
        Some(user) if verified => user,
        _ => {
            log::debug!("Rejected login attempt");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    log::info!("User {} logged in", user.id);

    let (headers, body) = start_session(&state, user)?;
    Ok((headers, Json(body)))
}

/// POST /auth/logout
///
/// Stateless sessions: the credential stays valid until expiry, so this only
/// clears the cookie carrier.
pub async fn logout(
    State(state): State<AppState>,
) -> ApiResult<(HeaderMap, Json<MessageResponse>)> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = state.transport.clear()? {
        headers.insert(SET_COOKIE, cookie);
    }

    Ok((headers, Json(MessageResponse::new("Logged out"))))
}

/// GET /auth/isauth
pub async fn is_auth(MaybeUser(user): MaybeUser) -> Json<IsAuthResponse> {
    Json(IsAuthResponse {
        authenticated: user.is_some(),
    })
}

/// GET /auth/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse { user: user.into() })
}

/// PATCH /auth/me
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    user.apply(req.into())?;

    let repo = UserRepository::new(state.pool.clone());
    if !repo.update_profile(&user).await? {
        return Err(ApiError::not_found("User not found"));
    }

    log::info!("Updated profile of user {}", user.id);

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}
