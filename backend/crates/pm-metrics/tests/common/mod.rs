#![allow(dead_code)]

use pm_core::{
    AuditEvent, Board, Column, Iteration, IterationStatus, WorkItem,
};
use pm_db::{
    AuditEventRepository, BoardRepository, ColumnRepository, IterationRepository,
    WorkItemRepository,
};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A migrated in-memory database with one board, a To Do and a Done column
pub struct TestBoard {
    pub pool: SqlitePool,
    pub board: Board,
    pub todo: Column,
    pub done: Column,
}

impl TestBoard {
    pub async fn new() -> Self {
        let pool = pm_db::connect_in_memory()
            .await
            .expect("Failed to create test pool");

        let board = Board::new("Charts".to_string(), None);
        BoardRepository::new(pool.clone())
            .create(&board)
            .await
            .expect("Failed to create board");

        let columns = ColumnRepository::new(pool.clone());
        let todo = Column::new(board.id, "To Do".to_string(), 0);
        let done = Column::new_done(board.id, "Done".to_string(), 1);
        columns.create(&todo).await.expect("Failed to create column");
        columns.create(&done).await.expect("Failed to create column");

        Self {
            pool,
            board,
            todo,
            done,
        }
    }

    /// Active iteration covering `days` calendar days from `start`
    pub async fn iteration(&self, start: DateTime<Utc>, days: i64) -> Iteration {
        let mut iteration = Iteration::new(
            self.board.id,
            "Sprint".to_string(),
            Some(start),
            Some(start + Duration::days(days - 1)),
        );
        iteration.status = IterationStatus::Active;
        IterationRepository::new(self.pool.clone())
            .create(&iteration)
            .await
            .expect("Failed to create iteration");
        iteration
    }

    pub async fn closed_iteration(&self, name: &str, closed_at: DateTime<Utc>) -> Iteration {
        let mut iteration = Iteration::new(
            self.board.id,
            name.to_string(),
            Some(closed_at - Duration::days(14)),
            Some(closed_at),
        );
        iteration.status = IterationStatus::Closed;
        iteration.closed_at = Some(closed_at);
        IterationRepository::new(self.pool.clone())
            .create(&iteration)
            .await
            .expect("Failed to create iteration");
        iteration
    }

    pub async fn item(
        &self,
        column_id: Uuid,
        iteration_id: Option<Uuid>,
        story_points: Option<i32>,
    ) -> WorkItem {
        let mut item = WorkItem::new(self.board.id, column_id, "Card".to_string());
        item.iteration_id = iteration_id;
        item.story_points = story_points;
        WorkItemRepository::new(self.pool.clone())
            .create(&item)
            .await
            .expect("Failed to create work item");
        item
    }

    pub async fn log(&self, event: AuditEvent) {
        AuditEventRepository::new(self.pool.clone())
            .append(&event)
            .await
            .expect("Failed to append audit event");
    }
}
