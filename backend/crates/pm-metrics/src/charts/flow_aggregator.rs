use crate::charts::load_iteration;
use crate::{ChartMetrics, MetricsResult, MetricsSources, SnapshotRecorder};

use pm_core::{CumulativeFlowChart, FlowSeries, MeasurementMode};

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use log::{debug, info};
use uuid::Uuid;

/// Cumulative flow from stored daily snapshots
#[derive(Clone)]
pub struct FlowAggregator {
    sources: MetricsSources,
    recorder: SnapshotRecorder,
    instrumentation: ChartMetrics,
}

impl FlowAggregator {
    pub fn new(
        sources: MetricsSources,
        recorder: SnapshotRecorder,
        instrumentation: ChartMetrics,
    ) -> Self {
        Self {
            sources,
            recorder,
            instrumentation,
        }
    }

    pub async fn cumulative_flow(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
    ) -> MetricsResult<CumulativeFlowChart> {
        self.cumulative_flow_on(iteration_id, mode, Utc::now().date_naive())
            .await
    }

    /// Cumulative flow, recording a snapshot for `today` first when the
    /// iteration has no history at all.
    pub async fn cumulative_flow_on(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
        today: NaiveDate,
    ) -> MetricsResult<CumulativeFlowChart> {
        let started = Instant::now();
        let iteration = load_iteration(&self.sources, iteration_id).await?;
        let columns = self.sources.columns.find_by_board(iteration.board_id).await?;

        let mut snapshots = self.sources.snapshots.find_snapshots(iteration_id).await?;
        if snapshots.is_empty() {
            info!(
                "No snapshot history for iteration {}, recording {}",
                iteration_id, today
            );
            self.recorder.record_iteration_on(&iteration, today).await?;
            snapshots = self.sources.snapshots.find_snapshots(iteration_id).await?;
        }

        let dates = snapshots
            .iter()
            .map(|snapshot| snapshot.snapshot_date)
            .collect();

        let series = columns
            .iter()
            .filter(|column| !column.is_hidden)
            .map(|column| FlowSeries {
                id: column.id,
                name: column.name.clone(),
                color: column.color.clone(),
                values: snapshots
                    .iter()
                    .map(|snapshot| snapshot.column_value(column.id, mode))
                    .collect(),
            })
            .collect::<Vec<_>>();

        debug!(
            "Cumulative flow for iteration {}: {} days x {} columns",
            iteration_id,
            snapshots.len(),
            series.len()
        );
        self.instrumentation
            .chart_computed("cumulative_flow", started.elapsed());

        Ok(CumulativeFlowChart {
            iteration_id,
            mode,
            dates,
            columns: series,
        })
    }
}
