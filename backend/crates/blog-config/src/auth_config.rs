use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_COOKIE_SAME_SITE, Environment,
    MIN_JWT_SECRET_LENGTH,
};

use std::str::FromStr;

use serde::Deserialize;

/// Session credential carrier used by the whole deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Cookie,
    Bearer,
}

impl FromStr for TransportKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cookie" => Ok(TransportKind::Cookie),
            "bearer" | "header" => Ok(TransportKind::Bearer),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret (min 32 chars)
    pub jwt_secret: Option<String>,
    pub transport: TransportKind,
    pub cookie_name: String,
    /// Explicit `Secure` flag. None = secure in production only
    pub cookie_secure: Option<bool>,
    /// "strict", "lax" or "none"
    pub cookie_same_site: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            transport: TransportKind::default(),
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            cookie_secure: None,
            cookie_same_site: String::from(DEFAULT_COOKIE_SAME_SITE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, environment: Environment) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().unwrap_or_default();
        if secret.is_empty() {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set BLOG_JWT_SECRET)",
            ));
        }
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.transport == TransportKind::Cookie {
            if self.cookie_name.is_empty()
                || !self
                    .cookie_name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Err(ConfigError::auth(format!(
                    "auth.cookie_name '{}' must be non-empty ASCII alphanumerics, '_' or '-'",
                    self.cookie_name
                )));
            }

            let same_site = self.cookie_same_site.to_lowercase();
            if !matches!(same_site.as_str(), "strict" | "lax" | "none") {
                return Err(ConfigError::auth(format!(
                    "auth.cookie_same_site must be strict, lax or none, got '{}'",
                    self.cookie_same_site
                )));
            }

            // Browsers reject SameSite=None cookies without Secure
            if same_site == "none" && !self.cookie_secure_for(environment) {
                return Err(ConfigError::auth(
                    "auth.cookie_same_site = none requires a secure cookie",
                ));
            }
        }

        Ok(())
    }

    /// Resolved `Secure` cookie flag for `environment`
    pub fn cookie_secure_for(&self, environment: Environment) -> bool {
        self.cookie_secure
            .unwrap_or_else(|| environment.is_production())
    }
}
