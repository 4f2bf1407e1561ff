use crate::{CoreError, ProfileChanges, User};

use googletest::prelude::*;

fn sample_user() -> User {
    User::new("  Alice@Example.COM ", "alice".to_string(), "$argon2id$stub".to_string())
}

#[test]
fn given_mixed_case_email_when_user_created_then_email_is_normalized() {
    let user = sample_user();

    assert_that!(user.email, eq("alice@example.com"));
    assert_that!(user.username, some(eq("alice")));
}

#[test]
fn given_user_when_debug_formatted_then_password_hash_is_redacted() {
    let user = sample_user();

    let rendered = format!("{:?}", user);

    assert_that!(rendered, contains_substring("<redacted>"));
    assert_that!(rendered, not(contains_substring("$argon2id$stub")));
}

#[test]
fn given_new_username_when_applied_then_username_is_replaced() {
    let mut user = sample_user();

    let result = user.apply(ProfileChanges {
        username: Some("  bob ".to_string()),
        avatar: None,
    });

    assert_that!(result, ok(anything()));
    assert_that!(user.username, some(eq("bob")));
}

#[test]
fn given_blank_username_when_applied_then_validation_error() {
    let mut user = sample_user();

    let result = user.apply(ProfileChanges {
        username: Some("   ".to_string()),
        avatar: None,
    });

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_that!(user.username, some(eq("alice")));
}

#[test]
fn given_empty_avatar_when_applied_then_avatar_is_cleared() {
    let mut user = sample_user();
    user.avatar = Some("https://cdn.example.com/a.png".to_string());

    user.apply(ProfileChanges {
        username: None,
        avatar: Some(String::new()),
    })
    .unwrap();

    assert_that!(user.avatar, none());
}
