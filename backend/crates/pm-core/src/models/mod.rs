pub mod audit_action;
pub mod audit_event;
pub mod board;
pub mod burn_down_chart;
pub mod burn_up_chart;
pub mod chart_point;
pub mod column;
pub mod column_breakdown;
pub mod cumulative_flow_chart;
pub mod daily_metrics_snapshot;
pub mod entity_kind;
pub mod event_payload;
pub mod iteration;
pub mod iteration_date_range;
pub mod iteration_status;
pub mod measurement_mode;
pub mod velocity_chart;
pub mod work_item;
