#![allow(dead_code)]

use blog_core::{Post, User};
use blog_db::UserRepository;

use chrono::{Duration, Utc};
use uuid::Uuid;

/// Creates a test User with a unique email
pub fn create_test_user() -> User {
    let suffix = Uuid::new_v4().simple().to_string();
    User::new(
        &format!("user-{}@example.com", &suffix[..8]),
        format!("user-{}", &suffix[..8]),
        "$argon2id$v=19$m=64,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

/// Creates and persists a test User
pub async fn insert_test_user(repo: &UserRepository) -> User {
    let user = create_test_user();
    repo.create(&user).await.expect("Failed to create test user");
    user
}

/// Creates a test Post authored by `author_id`, offset `age_secs` into the past
pub fn create_test_post(author_id: Uuid, age_secs: i64) -> Post {
    let mut post = Post::new(
        "Test Post".to_string(),
        "Test post body".to_string(),
        vec!["rust".to_string(), "web".to_string()],
        true,
        author_id,
    );
    let at = Utc::now() - Duration::seconds(age_secs);
    post.created_at = at;
    post.updated_at = at;
    post
}
