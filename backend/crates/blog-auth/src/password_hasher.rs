//! Salted one-way password hashing (Argon2id)

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

const DUMMY_PASSWORD: &str = "timing-equalizer-not-a-real-password";

/// Argon2 cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    /// Argon2id RFC recommendations
    fn default() -> Self {
        Self {
            memory_kib: 19456, // 19 MB
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Hashes and verifies passwords under fixed cost parameters.
///
/// Hashes are PHC strings, so verification reads salt and cost from the
/// stored value rather than from `self`.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Hasher with the production cost parameters
    pub fn new() -> AuthErrorResult<Self> {
        Self::with_params(HashParams::default())
    }

    /// Hasher with explicit cost parameters (cheap parameters keep tests fast)
    #[track_caller]
    pub fn with_params(params: HashParams) -> AuthErrorResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| AuthError::Hashing {
            message: format!("invalid argon2 params: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut hasher = Self {
            params,
            dummy_hash: String::new(),
        };
        hasher.dummy_hash = hasher.hash(DUMMY_PASSWORD)?;

        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `plaintext` under a fresh random salt
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing {
                message: format!("hash password: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hash.to_string())
    }

    /// Constant-time check of `plaintext` against a stored hash.
    /// A malformed stored hash verifies as `false`.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Stored password hash is malformed: {}", e);
                return false;
            }
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    /// Spend the same work as `verify` for a login against an unknown email.
    /// Always `false`.
    pub fn verify_dummy(&self, plaintext: &str) -> bool {
        let _ = self.verify(plaintext, &self.dummy_hash);
        false
    }
}
