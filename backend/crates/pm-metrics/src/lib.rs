//! Chart engine: rebuilds past board state from the audit log and turns it
//! into burn, flow and velocity series.

pub mod charts;
pub mod error;
pub mod instrumentation;
pub mod replay;
pub mod service;
pub mod snapshot_recorder;
pub mod sources;

#[cfg(test)]
mod tests;

pub use charts::burn_calculator::BurnCalculator;
pub use charts::flow_aggregator::FlowAggregator;
pub use charts::velocity_aggregator::VelocityAggregator;
pub use error::{MetricsError, Result as MetricsResult};
pub use instrumentation::ChartMetrics;
pub use replay::item_state::{ItemState, ItemStateMap};
pub use replay::replay_event::{ReplayChange, ReplayEvent};
pub use replay::state_reconstructor::{DaySnapshot, StateReconstructor};
pub use service::{MetricsService, MetricsSettings};
pub use snapshot_recorder::{RecordSummary, SnapshotRecorder};
pub use sources::{
    BoardSource, ColumnSource, EventLog, IterationSource, MetricsSources, SnapshotStore,
    WorkItemSource,
};
