use crate::MeasurementMode;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_item_count_mode_when_weighing_then_every_item_is_one() {
    let mode = MeasurementMode::ItemCount;

    assert_that!(mode.weight_of(Some(8)), eq(1));
    assert_that!(mode.weight_of(None), eq(1));
}

#[test]
fn given_weighted_mode_when_weighing_then_uses_points_and_zero_for_absent() {
    let mode = MeasurementMode::WeightedPoints;

    assert_that!(mode.weight_of(Some(5)), eq(5));
    assert_that!(mode.weight_of(None), eq(0));
    assert_that!(mode.weight_of(Some(-3)), eq(0));
}

#[test]
fn given_wire_names_when_parsing_then_accepts_both_cases() {
    assert_that!(
        MeasurementMode::from_str("ITEM_COUNT").unwrap(),
        eq(MeasurementMode::ItemCount)
    );
    assert_that!(
        MeasurementMode::from_str("weighted_points").unwrap(),
        eq(MeasurementMode::WeightedPoints)
    );
    assert_that!(MeasurementMode::from_str("hours"), err(anything()));
}

#[test]
fn test_measurement_mode_default_is_item_count() {
    assert_eq!(MeasurementMode::default(), MeasurementMode::ItemCount);
}
