//! SQLite-backed collaborators over the pm-db repositories.

use crate::{
    BoardSource, ColumnSource, EventLog, IterationSource, MetricsResult, MetricsSources,
    SnapshotStore, WorkItemSource,
};

use pm_core::{AuditEvent, Board, Column, DailyMetricsSnapshot, Iteration, WorkItem};
use pm_db::{
    AuditEventRepository, BoardRepository, ColumnRepository, IterationRepository,
    MetricsSnapshotRepository, WorkItemRepository,
};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

impl MetricsSources {
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self {
            boards: Arc::new(BoardRepository::new(pool.clone())),
            iterations: Arc::new(IterationRepository::new(pool.clone())),
            work_items: Arc::new(WorkItemRepository::new(pool.clone())),
            columns: Arc::new(ColumnRepository::new(pool.clone())),
            events: Arc::new(AuditEventRepository::new(pool.clone())),
            snapshots: Arc::new(MetricsSnapshotRepository::new(pool)),
        }
    }
}

#[async_trait]
impl BoardSource for BoardRepository {
    async fn find_board(&self, id: Uuid) -> MetricsResult<Option<Board>> {
        Ok(self.find_by_id(id).await?)
    }
}

#[async_trait]
impl IterationSource for IterationRepository {
    async fn find_iteration(&self, id: Uuid) -> MetricsResult<Option<Iteration>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn find_recently_closed(
        &self,
        board_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> MetricsResult<Vec<Iteration>> {
        Ok(IterationRepository::find_recently_closed(self, board_id, limit, offset).await?)
    }

    async fn find_active(&self) -> MetricsResult<Vec<Iteration>> {
        Ok(IterationRepository::find_active(self).await?)
    }
}

#[async_trait]
impl WorkItemSource for WorkItemRepository {
    async fn find_by_iteration(&self, iteration_id: Uuid) -> MetricsResult<Vec<WorkItem>> {
        Ok(WorkItemRepository::find_by_iteration(self, iteration_id).await?)
    }
}

#[async_trait]
impl ColumnSource for ColumnRepository {
    async fn find_by_board(&self, board_id: Uuid) -> MetricsResult<Vec<Column>> {
        Ok(ColumnRepository::find_by_board(self, board_id).await?)
    }
}

#[async_trait]
impl EventLog for AuditEventRepository {
    async fn find_work_item_events(
        &self,
        board_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
    ) -> MetricsResult<Vec<AuditEvent>> {
        Ok(self
            .find_work_item_events_for_board(board_id, start, end, limit)
            .await?)
    }
}

#[async_trait]
impl SnapshotStore for MetricsSnapshotRepository {
    async fn find_snapshots(&self, iteration_id: Uuid) -> MetricsResult<Vec<DailyMetricsSnapshot>> {
        Ok(self.find_by_iteration(iteration_id).await?)
    }

    async fn find_latest_snapshot(
        &self,
        iteration_id: Uuid,
    ) -> MetricsResult<Option<DailyMetricsSnapshot>> {
        Ok(self.find_latest_by_iteration(iteration_id).await?)
    }

    async fn upsert_snapshot(&self, snapshot: &DailyMetricsSnapshot) -> MetricsResult<()> {
        Ok(self.upsert(snapshot).await?)
    }
}
