pub mod audit_event_repository;
pub mod board_repository;
pub mod column_repository;
pub mod iteration_repository;
pub mod metrics_snapshot_repository;
pub mod work_item_repository;
