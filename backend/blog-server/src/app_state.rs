use crate::error::{Result as ServerErrorResult, ServerError};

use blog_auth::{CookieSettings, PasswordHasher, SameSite, SessionTransport, TokenService};
use blog_config::{AuthConfig, Config, ConfigError, CorsConfig, Environment, TransportKind};

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use sqlx::SqlitePool;

/// Shared application state for REST handlers.
///
/// Built once at startup; every field is immutable afterwards.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub hasher: Arc<PasswordHasher>,
    pub transport: Arc<SessionTransport>,
    pub allowed_origins: Arc<Vec<HeaderValue>>,
}

impl AppState {
    /// Assemble state from validated configuration
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        let tokens = TokenService::with_hs256(secret.as_bytes())?;
        let transport = session_transport(&config.auth, config.server.environment, tokens.ttl())?;

        Ok(Self {
            pool,
            tokens: Arc::new(tokens),
            hasher: Arc::new(PasswordHasher::new()?),
            transport: Arc::new(transport),
            allowed_origins: Arc::new(allowed_origins(&config.cors)?),
        })
    }
}

/// Build the deployment's session carrier. Cookies live as long as the
/// credential they carry (`max_age`).
pub fn session_transport(
    auth: &AuthConfig,
    environment: Environment,
    max_age: Duration,
) -> ServerErrorResult<SessionTransport> {
    match auth.transport {
        TransportKind::Bearer => Ok(SessionTransport::Bearer),
        TransportKind::Cookie => {
            let same_site = auth
                .cookie_same_site
                .parse::<SameSite>()
                .map_err(|message| ServerError::Setting {
                    setting: "auth.cookie_same_site".into(),
                    message,
                })?;

            Ok(SessionTransport::Cookie(CookieSettings {
                name: auth.cookie_name.clone(),
                path: "/".into(),
                secure: auth.cookie_secure_for(environment),
                same_site,
                max_age,
            }))
        }
    }
}

/// Parse CORS origins into header values
pub fn allowed_origins(cors: &CorsConfig) -> ServerErrorResult<Vec<HeaderValue>> {
    cors.allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ServerError::Setting {
                setting: "cors.allowed_origins".into(),
                message: format!("'{}': {}", origin, e),
            })
        })
        .collect()
}
