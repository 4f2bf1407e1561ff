use crate::{CoreError, Post, PostChanges};

use uuid::Uuid;

fn sample_post(author_id: Uuid) -> Post {
    Post::new(
        "Hello".to_string(),
        "First post".to_string(),
        vec!["intro".to_string()],
        true,
        author_id,
    )
}

#[test]
fn given_post_when_checking_owner_then_only_author_matches() {
    let author = Uuid::new_v4();
    let post = sample_post(author);

    assert!(post.is_owned_by(author));
    assert!(!post.is_owned_by(Uuid::new_v4()));
}

#[test]
fn given_partial_changes_when_applied_then_only_given_fields_change() {
    let author = Uuid::new_v4();
    let mut post = sample_post(author);

    post.apply(PostChanges {
        title: Some("Renamed".to_string()),
        published: Some(false),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(post.title, "Renamed");
    assert_eq!(post.text, "First post");
    assert_eq!(post.tags, vec!["intro".to_string()]);
    assert!(!post.published);
    assert_eq!(post.author_id, author);
}

#[test]
fn given_empty_text_when_applied_then_validation_error() {
    let mut post = sample_post(Uuid::new_v4());

    let result = post.apply(PostChanges {
        text: Some(" ".to_string()),
        ..Default::default()
    });

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_eq!(post.text, "First post");
}
