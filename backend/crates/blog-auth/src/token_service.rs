use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Validity window of every issued credential
pub const SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Issues and verifies HS256 session credentials.
///
/// Stateless: nothing is stored server-side, so a credential stays valid
/// until it expires or the secret changes.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with HS256 under `secret`
    #[track_caller]
    pub fn with_hs256(secret: &[u8]) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret {
                message: "secret cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: SESSION_TTL,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a credential asserting `subject`, expiring `ttl` from now
    #[track_caller]
    pub fn issue(&self, subject: Uuid) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenIssue {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry, returning the subject.
    ///
    /// Every failure collapses into `AuthError::InvalidCredential`; the reason
    /// only goes to the debug log.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        let caller = Location::caller();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                log::debug!("Session credential rejected: {:?}", e.kind());
                AuthError::InvalidCredential {
                    location: ErrorLocation::from(caller),
                }
            })?;

        token_data.claims.subject_id().map_err(|_| {
            log::debug!("Session credential rejected: subject is not a user id");
            AuthError::InvalidCredential {
                location: ErrorLocation::from(caller),
            }
        })
    }
}
