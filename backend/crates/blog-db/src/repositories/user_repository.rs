use crate::Result as DbErrorResult;
use crate::repositories::{parse_millis, parse_uuid};

use blog_core::User;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    username: Option<String>,
    avatar: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: parse_uuid(&self.id)?,
            email: self.email,
            password_hash: self.password_hash,
            username: self.username,
            avatar: self.avatar,
            created_at: parse_millis(self.created_at)?,
            updated_at: parse_millis(self.updated_at)?,
        })
    }
}

/// Credential store: identity records keyed by unique email
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity. A taken email yields `DbError::UniqueViolation`.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, password_hash, username, avatar, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.username)
        .bind(&user.avatar)
        .bind(user.created_at.timestamp_millis())
        .bind(user.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, email, password_hash, username, avatar, created_at, updated_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Lookup by login key. The email is normalized first.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, email, password_hash, username, avatar, created_at, updated_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(User::normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn count_by_email(&self, email: &str) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(User::normalize_email(email))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Persist display attributes. Returns false if the identity is gone.
    pub async fn update_profile(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET username = ?, avatar = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.username)
        .bind(&user.avatar)
        .bind(user.updated_at.timestamp_millis())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove an identity and, by cascade, its posts.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
