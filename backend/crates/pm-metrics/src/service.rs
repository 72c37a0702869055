use crate::{
    BurnCalculator, ChartMetrics, FlowAggregator, MetricsResult, MetricsSources, RecordSummary,
    SnapshotRecorder, VelocityAggregator,
};

use pm_core::{
    BurnDownChart, BurnUpChart, CumulativeFlowChart, DailyMetricsSnapshot, MeasurementMode,
    VelocityChart,
};

use sqlx::SqlitePool;
use uuid::Uuid;

const DEFAULT_ITERATION_DAYS: i64 = 14;
const DEFAULT_MAX_EVENTS: i64 = 10_000;
const DEFAULT_VELOCITY_ITERATIONS: u32 = 5;
const DEFAULT_MAX_CHART_DAYS: u32 = 366;

/// Engine tuning, filled from the `[metrics]` config section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSettings {
    pub default_iteration_days: i64,
    pub max_events: i64,
    pub default_velocity_iterations: u32,
    pub max_chart_days: u32,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            default_iteration_days: DEFAULT_ITERATION_DAYS,
            max_events: DEFAULT_MAX_EVENTS,
            default_velocity_iterations: DEFAULT_VELOCITY_ITERATIONS,
            max_chart_days: DEFAULT_MAX_CHART_DAYS,
        }
    }
}

/// Single entry point for every chart query and snapshot write
#[derive(Clone)]
pub struct MetricsService {
    burn: BurnCalculator,
    flow: FlowAggregator,
    velocity: VelocityAggregator,
    recorder: SnapshotRecorder,
}

impl MetricsService {
    pub fn new(sources: MetricsSources, settings: MetricsSettings) -> Self {
        let instrumentation = ChartMetrics::new();
        let recorder = SnapshotRecorder::new(sources.clone(), instrumentation.clone());

        Self {
            burn: BurnCalculator::new(sources.clone(), settings, instrumentation.clone()),
            flow: FlowAggregator::new(sources.clone(), recorder.clone(), instrumentation.clone()),
            velocity: VelocityAggregator::new(sources, settings, instrumentation),
            recorder,
        }
    }

    pub fn sqlite(pool: SqlitePool, settings: MetricsSettings) -> Self {
        Self::new(MetricsSources::sqlite(pool), settings)
    }

    pub async fn burn_down(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
    ) -> MetricsResult<BurnDownChart> {
        self.burn.burn_down(iteration_id, mode).await
    }

    pub async fn burn_up(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
    ) -> MetricsResult<BurnUpChart> {
        self.burn.burn_up(iteration_id, mode).await
    }

    pub async fn cumulative_flow(
        &self,
        iteration_id: Uuid,
        mode: MeasurementMode,
    ) -> MetricsResult<CumulativeFlowChart> {
        self.flow.cumulative_flow(iteration_id, mode).await
    }

    pub async fn velocity(
        &self,
        board_id: Uuid,
        count: Option<u32>,
        mode: MeasurementMode,
    ) -> MetricsResult<VelocityChart> {
        self.velocity.velocity(board_id, count, mode).await
    }

    pub async fn record_daily_snapshot(
        &self,
        iteration_id: Uuid,
    ) -> MetricsResult<DailyMetricsSnapshot> {
        self.recorder.record_daily_snapshot(iteration_id).await
    }

    pub async fn record_active(&self) -> MetricsResult<RecordSummary> {
        self.recorder.record_active().await
    }

    pub fn burn_calculator(&self) -> &BurnCalculator {
        &self.burn
    }

    pub fn flow_aggregator(&self) -> &FlowAggregator {
        &self.flow
    }

    pub fn snapshot_recorder(&self) -> &SnapshotRecorder {
        &self.recorder
    }
}
