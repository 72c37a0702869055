//! Forward daily rollups of live iteration state.
//!
//! Unlike the burn charts this never replays history: a snapshot is what the
//! board looks like at the moment it is recorded, filed under that day.

use crate::charts::load_iteration;
use crate::{ChartMetrics, MetricsResult, MetricsSources};

use pm_core::{Column, ColumnBreakdown, DailyMetricsSnapshot, Iteration, MeasurementMode, WorkItem};

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use log::{error, info};
use uuid::Uuid;

/// Outcome of a batch run over the active iterations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSummary {
    pub recorded: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct SnapshotRecorder {
    sources: MetricsSources,
    instrumentation: ChartMetrics,
}

impl SnapshotRecorder {
    pub fn new(sources: MetricsSources, instrumentation: ChartMetrics) -> Self {
        Self {
            sources,
            instrumentation,
        }
    }

    /// Record today's (UTC) snapshot for one iteration
    pub async fn record_daily_snapshot(
        &self,
        iteration_id: Uuid,
    ) -> MetricsResult<DailyMetricsSnapshot> {
        self.record_daily_snapshot_on(iteration_id, Utc::now().date_naive())
            .await
    }

    pub async fn record_daily_snapshot_on(
        &self,
        iteration_id: Uuid,
        day: NaiveDate,
    ) -> MetricsResult<DailyMetricsSnapshot> {
        let iteration = load_iteration(&self.sources, iteration_id).await?;
        self.record_iteration_on(&iteration, day).await
    }

    /// Compute the iteration's live rollup and upsert it under `day`
    pub async fn record_iteration_on(
        &self,
        iteration: &Iteration,
        day: NaiveDate,
    ) -> MetricsResult<DailyMetricsSnapshot> {
        let items = self.sources.work_items.find_by_iteration(iteration.id).await?;
        let columns = self.sources.columns.find_by_board(iteration.board_id).await?;

        let snapshot = build_snapshot(iteration.id, day, &items, &columns);
        self.sources.snapshots.upsert_snapshot(&snapshot).await?;
        self.instrumentation.snapshot_recorded();

        info!(
            "Recorded snapshot for iteration {} on {}: {}/{} items, {}/{} points done",
            iteration.id,
            day,
            snapshot.completed_count,
            snapshot.total_count,
            snapshot.completed_points,
            snapshot.total_points
        );

        Ok(snapshot)
    }

    /// Record today's snapshot for every active iteration.
    ///
    /// A failure on one iteration is logged and the rest still run.
    pub async fn record_active(&self) -> MetricsResult<RecordSummary> {
        self.record_active_on(Utc::now().date_naive()).await
    }

    pub async fn record_active_on(&self, day: NaiveDate) -> MetricsResult<RecordSummary> {
        let iterations = self.sources.iterations.find_active().await?;
        let mut summary = RecordSummary::default();

        for iteration in &iterations {
            match self.record_iteration_on(iteration, day).await {
                Ok(_) => summary.recorded += 1,
                Err(e) => {
                    error!(
                        "Failed to record snapshot for iteration {}: {}",
                        iteration.id, e
                    );
                    self.instrumentation.snapshot_failed();
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Totals, done totals and a per-column breakdown of the given items.
///
/// Every live column appears in the breakdown, empty ones with zeros. Items
/// sitting in a column that no longer exists count toward the totals only.
pub fn build_snapshot(
    iteration_id: Uuid,
    day: NaiveDate,
    items: &[WorkItem],
    columns: &[Column],
) -> DailyMetricsSnapshot {
    let mut snapshot = DailyMetricsSnapshot::new(iteration_id, day);
    let known: BTreeMap<Uuid, &Column> = columns.iter().map(|c| (c.id, c)).collect();

    snapshot.columns = columns
        .iter()
        .map(|column| {
            (
                column.id,
                ColumnBreakdown {
                    name: column.name.clone(),
                    count: 0,
                    points: 0,
                },
            )
        })
        .collect();

    for item in items {
        let points = MeasurementMode::WeightedPoints.weight_of(item.story_points);
        snapshot.total_count += 1;
        snapshot.total_points += points;

        let Some(column) = known.get(&item.column_id) else {
            continue;
        };
        if column.is_done {
            snapshot.completed_count += 1;
            snapshot.completed_points += points;
        }
        if let Some(breakdown) = snapshot.columns.get_mut(&column.id) {
            breakdown.count += 1;
            breakdown.points += points;
        }
    }

    snapshot
}
