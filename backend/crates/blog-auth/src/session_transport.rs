use crate::{AuthError, CookieSettings, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};

const BEARER_PREFIX: &str = "Bearer ";

/// Carrier of the session credential between client and server.
///
/// A deployment uses exactly one carrier for delivering, reading and
/// clearing the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransport {
    /// `HttpOnly` cookie set by the server
    Cookie(CookieSettings),
    /// `Authorization: Bearer <credential>` presented by the client
    Bearer,
}

impl SessionTransport {
    /// Credential presented on an inbound request, if any
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        match self {
            SessionTransport::Cookie(settings) => settings.read(headers),
            SessionTransport::Bearer => headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix(BEARER_PREFIX))
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        }
    }

    /// `Set-Cookie` header delivering `token`. `None` for the bearer carrier,
    /// where the token travels in the response body.
    #[track_caller]
    pub fn deliver(&self, token: &str) -> AuthErrorResult<Option<HeaderValue>> {
        match self {
            SessionTransport::Cookie(settings) => {
                Self::header_value(settings.session_cookie(token)).map(Some)
            }
            SessionTransport::Bearer => Ok(None),
        }
    }

    /// `Set-Cookie` header clearing the session. `None` for the bearer carrier.
    #[track_caller]
    pub fn clear(&self) -> AuthErrorResult<Option<HeaderValue>> {
        match self {
            SessionTransport::Cookie(settings) => {
                Self::header_value(settings.clearing_cookie()).map(Some)
            }
            SessionTransport::Bearer => Ok(None),
        }
    }

    /// Whether auth responses must carry the token in their body
    pub fn token_in_body(&self) -> bool {
        matches!(self, SessionTransport::Bearer)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionTransport::Cookie(_) => "cookie",
            SessionTransport::Bearer => "bearer",
        }
    }

    #[track_caller]
    fn header_value(value: String) -> AuthErrorResult<HeaderValue> {
        HeaderValue::try_from(value).map_err(|e| AuthError::InvalidHeader {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
