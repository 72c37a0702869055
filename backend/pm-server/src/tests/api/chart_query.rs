use crate::{ApiError, ChartQuery, VelocityQuery};

use pm_core::MeasurementMode;

use googletest::prelude::*;

#[test]
fn given_no_mode_when_parsing_then_item_count() {
    let query = ChartQuery::default();

    assert_that!(query.measurement_mode(), ok(eq(&MeasurementMode::ItemCount)));
}

#[test]
fn given_points_alias_when_parsing_then_weighted_points() {
    let query = ChartQuery {
        mode: Some("points".into()),
    };

    assert_that!(
        query.measurement_mode(),
        ok(eq(&MeasurementMode::WeightedPoints))
    );
}

#[test]
fn given_unknown_mode_when_parsing_then_validation_error() {
    let query = ChartQuery {
        mode: Some("hours".into()),
    };

    let result = query.measurement_mode();

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn given_no_count_when_parsing_velocity_then_none() {
    let query = VelocityQuery::default();

    assert_that!(query.iteration_count(), ok(none()));
}

#[test]
fn given_count_in_range_when_parsing_velocity_then_kept() {
    let query = VelocityQuery {
        mode: None,
        count: Some("3".into()),
    };

    assert_that!(query.iteration_count(), ok(some(eq(&3))));
}

#[test]
fn given_zero_or_oversized_count_when_parsing_velocity_then_rejected() {
    for count in ["0", "51"] {
        let query = VelocityQuery {
            mode: None,
            count: Some(count.into()),
        };

        assert!(matches!(
            query.iteration_count(),
            Err(ApiError::Validation { .. })
        ));
    }
}

#[test]
fn given_non_numeric_count_when_parsing_velocity_then_rejected_on_count_field() {
    for count in ["abc", "-1", "2.5", ""] {
        let query = VelocityQuery {
            mode: None,
            count: Some(count.into()),
        };

        match query.iteration_count() {
            Err(ApiError::Validation { field, .. }) => {
                assert_eq!(field.as_deref(), Some("count"));
            }
            other => panic!("expected validation error for {:?}, got {:?}", count, other),
        }
    }
}
