pub mod claims;
pub mod cookie_settings;
pub mod error;
pub mod password_hasher;
pub mod same_site;
pub mod session_transport;
pub mod token_service;

pub use claims::Claims;
pub use cookie_settings::CookieSettings;
pub use error::{AuthError, Result};
pub use password_hasher::{HashParams, PasswordHasher};
pub use same_site::SameSite;
pub use session_transport::SessionTransport;
pub use token_service::{SESSION_TTL, TokenService};

#[cfg(test)]
mod tests;
