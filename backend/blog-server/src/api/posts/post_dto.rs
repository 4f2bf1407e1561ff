use blog_core::{Post, PostAuthor, PostWithAuthor, User};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PostAuthorDto {
    pub id: String,
    pub username: Option<String>,
}

impl From<PostAuthor> for PostAuthorDto {
    fn from(a: PostAuthor) -> Self {
        Self {
            id: a.id.to_string(),
            username: a.username,
        }
    }
}

/// Post with its author populated. `author` is null if the author is gone.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub author: Option<PostAuthorDto>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PostDto {
    /// A post written by `author`, who is known to the caller
    pub fn authored_by(post: Post, author: &User) -> Self {
        PostWithAuthor {
            post,
            author: Some(PostAuthor {
                id: author.id,
                username: author.username.clone(),
            }),
        }
        .into()
    }
}

impl From<PostWithAuthor> for PostDto {
    fn from(p: PostWithAuthor) -> Self {
        let PostWithAuthor { post, author } = p;
        Self {
            id: post.id.to_string(),
            title: post.title,
            text: post.text,
            tags: post.tags,
            published: post.published,
            author: author.map(PostAuthorDto::from),
            created_at: post.created_at.timestamp(),
            updated_at: post.updated_at.timestamp(),
        }
    }
}
