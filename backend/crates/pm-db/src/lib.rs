pub mod connection;
pub mod error;
pub mod repositories;

mod decode;


pub use connection::database::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::audit_event_repository::AuditEventRepository;
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::iteration_repository::IterationRepository;
pub use repositories::metrics_snapshot_repository::MetricsSnapshotRepository;
pub use repositories::work_item_repository::WorkItemRepository;
