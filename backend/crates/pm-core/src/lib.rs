pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::audit_action::AuditAction;
pub use models::audit_event::AuditEvent;
pub use models::board::Board;
pub use models::burn_down_chart::BurnDownChart;
pub use models::burn_up_chart::BurnUpChart;
pub use models::chart_point::ChartPoint;
pub use models::column::Column;
pub use models::column_breakdown::ColumnBreakdown;
pub use models::cumulative_flow_chart::{CumulativeFlowChart, FlowSeries};
pub use models::daily_metrics_snapshot::DailyMetricsSnapshot;
pub use models::entity_kind::EntityKind;
pub use models::event_payload::{ItemStateBlob, IterationPayload, MovePayload};
pub use models::iteration::Iteration;
pub use models::iteration_date_range::IterationDateRange;
pub use models::iteration_status::IterationStatus;
pub use models::measurement_mode::MeasurementMode;
pub use models::velocity_chart::{VelocityChart, VelocityEntry};
pub use models::work_item::WorkItem;

pub use error_location::ErrorLocation;
