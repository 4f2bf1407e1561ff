use crate::{CoreError, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub author_id: Uuid,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        title: String,
        text: String,
        tags: Vec<String>,
        published: bool,
        author_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            text,
            tags,
            published,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Apply a partial update. The author is never reassigned.
    #[track_caller]
    pub fn apply(&mut self, changes: PostChanges) -> CoreResult<()> {
        if changes.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::validation("title", "title cannot be empty"));
        }
        if changes.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::validation("text", "text cannot be empty"));
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(text) = changes.text {
            self.text = text;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        if let Some(published) = changes.published {
            self.published = published;
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

/// Public display attributes of a post's author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: Uuid,
    pub username: Option<String>,
}

/// A post joined with its author's display attributes
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<PostAuthor>,
}
