use crate::tests::fakes::{FakeStore, date, utc};
use crate::{ChartMetrics, MetricsSettings, VelocityAggregator};

use pm_core::{DailyMetricsSnapshot, MeasurementMode};

use std::sync::Arc;

use googletest::prelude::*;
use uuid::Uuid;

fn aggregator(store: &Arc<FakeStore>) -> VelocityAggregator {
    VelocityAggregator::new(store.sources(), MetricsSettings::default(), ChartMetrics::new())
}

fn final_snapshot(iteration_id: Uuid, count: i64, points: i64) -> DailyMetricsSnapshot {
    let mut snapshot = DailyMetricsSnapshot::new(iteration_id, date(2026, 2, 1));
    snapshot.completed_count = count;
    snapshot.completed_points = points;
    snapshot
}

#[tokio::test]
async fn given_closed_iterations_when_velocity_then_oldest_first() {
    // Given
    let store = FakeStore::new();
    let board = store.add_board();
    let newest = store.add_closed_iteration(board.id, "Sprint 3", utc(2026, 3, 1, 0));
    let oldest = store.add_closed_iteration(board.id, "Sprint 1", utc(2026, 1, 1, 0));
    let middle = store.add_closed_iteration(board.id, "Sprint 2", utc(2026, 2, 1, 0));
    for (iteration, count) in [(&oldest, 4), (&middle, 6), (&newest, 5)] {
        store.add_snapshot(final_snapshot(iteration.id, count, count * 2));
    }

    // When
    let chart = aggregator(&store)
        .velocity(board.id, Some(5), MeasurementMode::ItemCount)
        .await
        .unwrap();

    // Then
    let names: Vec<&str> = chart.iterations.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Sprint 1", "Sprint 2", "Sprint 3"]);
    let counts: Vec<i64> = chart.iterations.iter().map(|e| e.completed_count).collect();
    assert_eq!(counts, vec![4, 6, 5]);
    assert_that!(chart.iterations[1].completed_points, eq(12));
}

#[tokio::test]
async fn given_count_smaller_than_history_when_velocity_then_most_recent_kept() {
    let store = FakeStore::new();
    let board = store.add_board();
    store.add_closed_iteration(board.id, "Sprint 1", utc(2026, 1, 1, 0));
    store.add_closed_iteration(board.id, "Sprint 2", utc(2026, 2, 1, 0));
    store.add_closed_iteration(board.id, "Sprint 3", utc(2026, 3, 1, 0));

    let chart = aggregator(&store)
        .velocity(board.id, Some(2), MeasurementMode::ItemCount)
        .await
        .unwrap();

    let names: Vec<&str> = chart.iterations.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Sprint 2", "Sprint 3"]);
}

#[tokio::test]
async fn given_iteration_without_snapshot_when_velocity_then_live_items_counted() {
    // Given
    let store = FakeStore::new();
    let board = store.add_board();
    let todo = store.add_column(board.id, "To Do", false);
    let done = store.add_column(board.id, "Done", true);
    let iteration = store.add_closed_iteration(board.id, "Sprint 1", utc(2026, 3, 1, 0));
    store.add_item(board.id, done.id, Some(iteration.id), Some(3));
    store.add_item(board.id, done.id, Some(iteration.id), None);
    store.add_item(board.id, todo.id, Some(iteration.id), Some(8));

    // When
    let chart = aggregator(&store)
        .velocity(board.id, None, MeasurementMode::WeightedPoints)
        .await
        .unwrap();

    // Then
    assert_that!(chart.iterations.len(), eq(1));
    assert_that!(chart.iterations[0].completed_count, eq(2));
    assert_that!(chart.iterations[0].completed_points, eq(3));
    assert_that!(
        chart.iterations[0].completed(MeasurementMode::WeightedPoints),
        eq(3)
    );
}

#[tokio::test]
async fn given_active_iteration_when_velocity_then_excluded() {
    let store = FakeStore::new();
    let board = store.add_board();
    store.add_iteration(board.id, utc(2026, 3, 1, 0), 10);

    let chart = aggregator(&store)
        .velocity(board.id, None, MeasurementMode::ItemCount)
        .await
        .unwrap();

    assert_that!(chart.iterations.is_empty(), eq(true));
}

#[tokio::test]
async fn given_unknown_board_when_velocity_then_not_found() {
    let store = FakeStore::new();

    let result = aggregator(&store)
        .velocity(Uuid::new_v4(), None, MeasurementMode::ItemCount)
        .await;

    assert_that!(result.as_ref().err().map(|e| e.is_not_found()), some(eq(true)));
}
