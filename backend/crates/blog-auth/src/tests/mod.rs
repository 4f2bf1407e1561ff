
use crate::{HashParams, PasswordHasher};

/// Hasher with minimal argon2 cost
pub(crate) fn cheap_hasher() -> PasswordHasher {
    PasswordHasher::with_params(HashParams {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}
