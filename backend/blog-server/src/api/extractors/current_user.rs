//! Auth gate: resolve the session credential into an identity

use crate::{ApiError, AppState};

use blog_core::User;
use blog_db::{Result as DbErrorResult, UserRepository};

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Required mode: the authenticated identity, or a 401 before the handler runs
pub struct CurrentUser(pub User);

/// Optional mode: the authenticated identity if any. Never rejects.
pub struct MaybeUser(pub Option<User>);

/// Outcome of resolving a request, cached in the request extensions
#[derive(Clone)]
struct ResolvedIdentity(Option<User>);

/// Extract, verify and resolve the session credential.
///
/// A missing or invalid credential, or one naming an identity that no longer
/// exists, resolves to `None`. Only store failures are errors.
async fn resolve_identity(parts: &mut Parts, state: &AppState) -> DbErrorResult<Option<User>> {
    if let Some(ResolvedIdentity(cached)) = parts.extensions.get::<ResolvedIdentity>() {
        return Ok(cached.clone());
    }

    let identity = match state.transport.extract(&parts.headers) {
        None => None,
        Some(token) => match state.tokens.verify(&token) {
            Ok(user_id) => {
                let user = UserRepository::new(state.pool.clone())
                    .find_by_id(user_id)
                    .await?;
                if user.is_none() {
                    log::debug!("Credential names unknown identity {}", user_id);
                }
                user
            }
            Err(_) => None,
        },
    };

    parts
        .extensions
        .insert(ResolvedIdentity(identity.clone()));

    Ok(identity)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match resolve_identity(parts, state).await? {
                Some(user) => Ok(CurrentUser(user)),
                None => Err(ApiError::unauthorized("Unauthorized")),
            }
        }
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match resolve_identity(parts, state).await {
                Ok(identity) => Ok(MaybeUser(identity)),
                Err(e) => {
                    log::error!("Identity lookup failed, treating request as anonymous: {}", e);
                    Ok(MaybeUser(None))
                }
            }
        }
    }
}
