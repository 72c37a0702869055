use crate::charts::done_column_ids;
use crate::{ChartMetrics, MetricsError, MetricsResult, MetricsSettings, MetricsSources};

use pm_core::{MeasurementMode, VelocityChart, VelocityEntry};

use std::collections::BTreeSet;
use std::time::Instant;

use log::debug;
use uuid::Uuid;

/// Completed work per closed iteration
#[derive(Clone)]
pub struct VelocityAggregator {
    sources: MetricsSources,
    settings: MetricsSettings,
    instrumentation: ChartMetrics,
}

impl VelocityAggregator {
    pub fn new(
        sources: MetricsSources,
        settings: MetricsSettings,
        instrumentation: ChartMetrics,
    ) -> Self {
        Self {
            sources,
            settings,
            instrumentation,
        }
    }

    /// The `count` most recently closed iterations of a board, oldest first.
    ///
    /// `None` uses the configured default. Totals come from each iteration's
    /// latest snapshot, or from its live items when it has none.
    pub async fn velocity(
        &self,
        board_id: Uuid,
        count: Option<u32>,
        mode: MeasurementMode,
    ) -> MetricsResult<VelocityChart> {
        let started = Instant::now();

        if self.sources.boards.find_board(board_id).await?.is_none() {
            return Err(MetricsError::not_found("Board", board_id));
        }

        let count = count
            .unwrap_or(self.settings.default_velocity_iterations)
            .max(1);
        let mut closed = self
            .sources
            .iterations
            .find_recently_closed(board_id, i64::from(count), 0)
            .await?;
        closed.reverse();

        let columns = self.sources.columns.find_by_board(board_id).await?;
        let done_columns = done_column_ids(&columns);

        let mut entries = Vec::with_capacity(closed.len());
        for iteration in closed {
            let (completed_count, completed_points) =
                match self.sources.snapshots.find_latest_snapshot(iteration.id).await? {
                    Some(snapshot) => (snapshot.completed_count, snapshot.completed_points),
                    None => {
                        debug!(
                            "Iteration {} has no snapshot, counting live items",
                            iteration.id
                        );
                        self.live_completed(iteration.id, &done_columns).await?
                    }
                };

            entries.push(VelocityEntry {
                iteration_id: iteration.id,
                name: iteration.name,
                completed_count,
                completed_points,
            });
        }

        self.instrumentation
            .chart_computed("velocity", started.elapsed());

        Ok(VelocityChart {
            board_id,
            mode,
            iterations: entries,
        })
    }

    async fn live_completed(
        &self,
        iteration_id: Uuid,
        done_columns: &BTreeSet<Uuid>,
    ) -> MetricsResult<(i64, i64)> {
        let items = self.sources.work_items.find_by_iteration(iteration_id).await?;

        Ok(items
            .iter()
            .filter(|item| done_columns.contains(&item.column_id))
            .fold((0, 0), |(count, points), item| {
                (
                    count + 1,
                    points + MeasurementMode::WeightedPoints.weight_of(item.story_points),
                )
            }))
    }
}
