use crate::repositories::{parse_millis, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use blog_core::{Post, PostAuthor, PostWithAuthor};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.text, p.tags, p.published, p.author_id,
           p.created_at, p.updated_at,
           u.id AS author_user_id, u.username AS author_username
    FROM posts p
    LEFT JOIN users u ON u.id = p.author_id
"#;

#[derive(FromRow)]
struct PostRow {
    id: String,
    title: String,
    text: String,
    tags: String,
    published: bool,
    author_id: String,
    created_at: i64,
    updated_at: i64,
}

impl PostRow {
    fn into_post(self) -> DbErrorResult<Post> {
        let tags = serde_json::from_str(&self.tags).map_err(|e| DbError::Decode {
            message: format!("invalid tags for post {}: {}", self.id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Post {
            id: parse_uuid(&self.id)?,
            title: self.title,
            text: self.text,
            tags,
            published: self.published,
            author_id: parse_uuid(&self.author_id)?,
            created_at: parse_millis(self.created_at)?,
            updated_at: parse_millis(self.updated_at)?,
        })
    }
}

#[derive(FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_user_id: Option<String>,
    author_username: Option<String>,
}

impl PostWithAuthorRow {
    fn into_post_with_author(self) -> DbErrorResult<PostWithAuthor> {
        let author = match self.author_user_id {
            Some(id) => Some(PostAuthor {
                id: parse_uuid(&id)?,
                username: self.author_username,
            }),
            None => None,
        };

        Ok(PostWithAuthor {
            post: self.post.into_post()?,
            author,
        })
    }
}

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[track_caller]
    fn encode_tags(post: &Post) -> DbErrorResult<String> {
        serde_json::to_string(&post.tags).map_err(|e| DbError::Decode {
            message: format!("cannot encode tags for post {}: {}", post.id, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn create(&self, post: &Post) -> DbErrorResult<()> {
        let tags = Self::encode_tags(post)?;

        sqlx::query(
            r#"
              INSERT INTO posts (
                  id, title, text, tags, published, author_id, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(post.id.to_string())
        .bind(&post.title)
        .bind(&post.text)
        .bind(tags)
        .bind(post.published)
        .bind(post.author_id.to_string())
        .bind(post.created_at.timestamp_millis())
        .bind(post.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
              SELECT id, title, text, tags, published, author_id, created_at, updated_at
              FROM posts
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRow::into_post).transpose()
    }

    /// Single post with its author's display attributes
    pub async fn find_with_author(&self, id: Uuid) -> DbErrorResult<Option<PostWithAuthor>> {
        let query = format!("{SELECT_WITH_AUTHOR} WHERE p.id = ?");

        let row = sqlx::query_as::<_, PostWithAuthorRow>(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(PostWithAuthorRow::into_post_with_author)
            .transpose()
    }

    /// All posts, newest first
    pub async fn list_with_authors(&self) -> DbErrorResult<Vec<PostWithAuthor>> {
        let query = format!("{SELECT_WITH_AUTHOR} ORDER BY p.created_at DESC, p.rowid DESC");

        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(PostWithAuthorRow::into_post_with_author)
            .collect()
    }

    /// Persist editable fields. Returns false if the post is gone.
    pub async fn update(&self, post: &Post) -> DbErrorResult<bool> {
        let tags = Self::encode_tags(post)?;

        let result = sqlx::query(
            r#"
              UPDATE posts
              SET title = ?, text = ?, tags = ?, published = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&post.title)
        .bind(&post.text)
        .bind(tags)
        .bind(post.published)
        .bind(post.updated_at.timestamp_millis())
        .bind(post.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
