use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid audit action: {value} {location}")]
    InvalidAuditAction {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid entity kind: {value} {location}")]
    InvalidEntityKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid iteration status: {value} {location}")]
    InvalidIterationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid measurement mode: {value} {location}")]
    InvalidMeasurementMode {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
