//! Collaborator seams of the chart engine.
//!
//! Every chart reads through these traits so the engine can run against the
//! SQLite repositories in production and in-memory fakes in tests.

pub mod sqlite;

use crate::MetricsResult;

use pm_core::{AuditEvent, Board, Column, DailyMetricsSnapshot, Iteration, WorkItem};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait BoardSource: Send + Sync {
    async fn find_board(&self, id: Uuid) -> MetricsResult<Option<Board>>;
}

#[async_trait]
pub trait IterationSource: Send + Sync {
    async fn find_iteration(&self, id: Uuid) -> MetricsResult<Option<Iteration>>;

    /// Closed iterations of a board, most recently closed first
    async fn find_recently_closed(
        &self,
        board_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> MetricsResult<Vec<Iteration>>;

    /// Active iterations across all boards
    async fn find_active(&self) -> MetricsResult<Vec<Iteration>>;
}

#[async_trait]
pub trait WorkItemSource: Send + Sync {
    /// Live (not deleted) items currently assigned to the iteration
    async fn find_by_iteration(&self, iteration_id: Uuid) -> MetricsResult<Vec<WorkItem>>;
}

#[async_trait]
pub trait ColumnSource: Send + Sync {
    /// Live columns of a board in display order
    async fn find_by_board(&self, board_id: Uuid) -> MetricsResult<Vec<Column>>;
}

#[async_trait]
pub trait EventLog: Send + Sync {
    /// Work item events of a board with `start <= occurred_at < end`,
    /// ascending by `(occurred_at, sequence)`, at most `limit` of the newest.
    async fn find_work_item_events(
        &self,
        board_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
    ) -> MetricsResult<Vec<AuditEvent>>;
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// All snapshots of an iteration, oldest day first
    async fn find_snapshots(&self, iteration_id: Uuid) -> MetricsResult<Vec<DailyMetricsSnapshot>>;

    async fn find_latest_snapshot(
        &self,
        iteration_id: Uuid,
    ) -> MetricsResult<Option<DailyMetricsSnapshot>>;

    /// Insert or replace the row for `(iteration_id, snapshot_date)`
    async fn upsert_snapshot(&self, snapshot: &DailyMetricsSnapshot) -> MetricsResult<()>;
}

/// The full set of collaborators the engine reads from and writes to
#[derive(Clone)]
pub struct MetricsSources {
    pub boards: Arc<dyn BoardSource>,
    pub iterations: Arc<dyn IterationSource>,
    pub work_items: Arc<dyn WorkItemSource>,
    pub columns: Arc<dyn ColumnSource>,
    pub events: Arc<dyn EventLog>,
    pub snapshots: Arc<dyn SnapshotStore>,
}
