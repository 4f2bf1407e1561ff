use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Single outcome for every credential failure: bad signature, expired,
    /// malformed, unknown subject.
    #[error("Invalid session credential {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Invalid signing secret: {message} {location}")]
    InvalidSecret {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to issue session credential: {source} {location}")]
    TokenIssue {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid session header: {message} {location}")]
    InvalidHeader {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
