use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error_mentions_relative() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _path = EnvGuard::set("BLOG_DATABASE_PATH", "/var/lib/blog.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("relative"));
}

#[test]
#[serial]
fn given_database_path_escaping_config_dir_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _path = EnvGuard::set("BLOG_DATABASE_PATH", "../blog.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_max_connections_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _max = EnvGuard::set("BLOG_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_database_path_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_config_dir();
    let _path = EnvGuard::set("BLOG_DATABASE_PATH", "data/blog.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
