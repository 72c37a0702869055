//! Column decoding shared by the repositories.
//!
//! UUIDs are stored as TEXT and timestamps as unix seconds; a value that
//! fails to decode surfaces as `DbError::Decode` naming the field.

use crate::{DbError, Result};

use pm_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn decode_error(field: &str, message: String) -> DbError {
    DbError::Decode {
        field: field.to_string(),
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub(crate) fn parse_uuid(value: &str, field: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| decode_error(field, format!("invalid UUID: {}", e)))
}

#[track_caller]
pub(crate) fn parse_optional_uuid(value: Option<String>, field: &str) -> Result<Option<Uuid>> {
    value.map(|v| parse_uuid(&v, field)).transpose()
}

#[track_caller]
pub(crate) fn parse_timestamp(secs: i64, field: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| decode_error(field, format!("timestamp {} out of range", secs)))
}

#[track_caller]
pub(crate) fn parse_optional_timestamp(
    secs: Option<i64>,
    field: &str,
) -> Result<Option<DateTime<Utc>>> {
    secs.map(|s| parse_timestamp(s, field)).transpose()
}
