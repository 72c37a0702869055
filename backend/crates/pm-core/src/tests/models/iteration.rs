use crate::Iteration;

use chrono::{NaiveDate, TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_explicit_dates_when_range_then_covers_inclusive_days() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 6, 17, 0, 0).unwrap();
    let iteration = Iteration::new(Uuid::new_v4(), "Sprint 1".into(), Some(start), Some(end));

    let range = iteration.date_range(14);

    assert_that!(range.day_count(), eq(5));
    assert_eq!(
        range.days(),
        vec![
            day(2026, 3, 2),
            day(2026, 3, 3),
            day(2026, 3, 4),
            day(2026, 3, 5),
            day(2026, 3, 6)
        ]
    );
}

#[test]
fn given_missing_end_when_range_then_defaults_to_start_plus_days() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    let iteration = Iteration::new(Uuid::new_v4(), "Sprint 2".into(), Some(start), None);

    let range = iteration.date_range(14);

    assert_that!(range.last_day(), eq(day(2026, 3, 16)));
    assert_that!(range.day_count(), eq(15));
}

#[test]
fn given_limit_below_day_count_when_first_days_then_truncated_from_start() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    let iteration = Iteration::new(Uuid::new_v4(), "Long".into(), Some(start), None);
    let range = iteration.date_range(365);

    assert_eq!(range.first_days(2), vec![day(2026, 3, 2), day(2026, 3, 3)]);
    assert_that!(range.first_days(1000).len(), eq(366));
}

#[test]
fn given_missing_start_when_range_then_uses_creation_time() {
    let mut iteration = Iteration::new(Uuid::new_v4(), "Sprint 3".into(), None, None);
    iteration.created_at = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();

    let range = iteration.date_range(7);

    assert_that!(range.first_day(), eq(day(2026, 1, 10)));
    assert_that!(range.last_day(), eq(day(2026, 1, 17)));
}

#[test]
fn given_end_before_start_when_range_then_single_day() {
    let start = Utc.with_ymd_and_hms(2026, 3, 9, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let iteration = Iteration::new(Uuid::new_v4(), "Backwards".into(), Some(start), Some(end));

    let range = iteration.date_range(14);

    assert_eq!(range.days(), vec![day(2026, 3, 9)]);
}

#[test]
fn test_window_bounds_are_midnight_aligned() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 15, 30, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 4, 8, 0, 0).unwrap();
    let range = Iteration::new(Uuid::new_v4(), "S".into(), Some(start), Some(end)).date_range(14);

    assert_eq!(
        range.window_start(),
        Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
    );
    assert_eq!(
        range.window_end(),
        Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap()
    );
}
