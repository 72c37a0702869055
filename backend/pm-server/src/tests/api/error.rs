use crate::ApiError;

use pm_core::{CoreError, MeasurementMode};
use pm_metrics::MetricsError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn json_body(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Iteration not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Iteration not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("count must be between 1 and 50", "count");

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "count");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    assert!(matches!(api_err, ApiError::Validation { .. }));
}

#[tokio::test]
async fn test_metrics_not_found_converts_to_404_naming_entity() {
    let id = Uuid::new_v4();
    let api_err: ApiError = MetricsError::not_found("Iteration", id).into();

    let (status, json) = json_body(api_err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], format!("Iteration {} not found", id));
}

#[test]
fn test_metrics_storage_error_converts_to_internal() {
    let api_err: ApiError = MetricsError::storage("disk full").into();

    assert!(matches!(api_err, ApiError::Internal { ref message, .. } if message == "disk full"));
}

#[tokio::test]
async fn test_invalid_mode_converts_to_validation_on_mode_field() {
    let core_err: CoreError = MeasurementMode::from_str("hours").unwrap_err();
    let api_err: ApiError = core_err.into();

    let (status, json) = json_body(api_err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "mode");
}
