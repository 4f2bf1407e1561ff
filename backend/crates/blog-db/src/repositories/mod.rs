pub mod post_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        message: format!("invalid id '{}': {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_millis(value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value).ok_or_else(|| DbError::Decode {
        message: format!("timestamp out of range: {}", value),
        location: ErrorLocation::from(Location::caller()),
    })
}
