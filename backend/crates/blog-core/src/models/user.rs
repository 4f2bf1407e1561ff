use crate::{CoreError, Result as CoreResult};

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Persisted identity record.
///
/// Not `Serialize`: outbound payloads use a DTO without the hash.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub username: Option<String>,
    pub avatar: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: &str, username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: Self::normalize_email(email),
            password_hash,
            username: Some(username),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Login key form of an email address
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Apply a profile update. Only display attributes are mutable.
    #[track_caller]
    pub fn apply(&mut self, changes: ProfileChanges) -> CoreResult<()> {
        if let Some(username) = changes.username {
            let username = username.trim();
            if username.is_empty() {
                return Err(CoreError::validation("username", "username cannot be empty"));
            }
            self.username = Some(username.to_string());
        }

        if let Some(avatar) = changes.avatar {
            let avatar = avatar.trim();
            self.avatar = (!avatar.is_empty()).then(|| avatar.to_string());
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("username", &self.username)
            .field("avatar", &self.avatar)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Owner-editable profile fields
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub username: Option<String>,
    /// An empty string clears the avatar
    pub avatar: Option<String>,
}
