use pm_core::{ColumnBreakdown, DailyMetricsSnapshot, Iteration, IterationStatus, WorkItem};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

/// Midnight UTC on the given day
pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a two-week iteration starting at `start`
pub fn create_test_iteration(board_id: Uuid, start: DateTime<Utc>) -> Iteration {
    Iteration::new(
        board_id,
        "Test Iteration".to_string(),
        Some(start),
        Some(start + Duration::days(14)),
    )
}

/// Creates a closed iteration with the given close time
pub fn create_closed_iteration(board_id: Uuid, name: &str, closed_at: DateTime<Utc>) -> Iteration {
    let mut iteration = Iteration::new(
        board_id,
        name.to_string(),
        Some(closed_at - Duration::days(14)),
        Some(closed_at),
    );
    iteration.status = IterationStatus::Closed;
    iteration.closed_at = Some(closed_at);
    iteration
}

/// Creates a work item in `column_id` with optional points and iteration
pub fn create_test_work_item(
    board_id: Uuid,
    column_id: Uuid,
    iteration_id: Option<Uuid>,
    story_points: Option<i32>,
) -> WorkItem {
    let mut item = WorkItem::new(board_id, column_id, "Test Work Item".to_string());
    item.iteration_id = iteration_id;
    item.story_points = story_points;
    item
}

/// Creates a snapshot with a single column entry
pub fn create_test_snapshot(
    iteration_id: Uuid,
    day: NaiveDate,
    column_id: Uuid,
    count: i64,
    points: i64,
) -> DailyMetricsSnapshot {
    let mut snapshot = DailyMetricsSnapshot::new(iteration_id, day);
    snapshot.total_count = count;
    snapshot.total_points = points;
    snapshot.columns.insert(
        column_id,
        ColumnBreakdown {
            name: "Doing".to_string(),
            count,
            points,
        },
    );
    snapshot
}
