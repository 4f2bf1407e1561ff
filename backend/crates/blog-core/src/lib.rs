pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::post::{Post, PostAuthor, PostChanges, PostWithAuthor};
pub use models::user::{ProfileChanges, User};

#[cfg(test)]
mod tests;
