use crate::Result as DbErrorResult;
use crate::decode::{decode_error, parse_optional_timestamp, parse_timestamp, parse_uuid};

use pm_core::{Iteration, IterationStatus};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const ITERATION_COLUMNS: &str = r#"
    id, board_id, name, goal, start_date, end_date, status, closed_at,
    created_at, updated_at, deleted_at
"#;

#[derive(Clone)]
pub struct IterationRepository {
    pool: SqlitePool,
}

impl IterationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, iteration: &Iteration) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pm_iterations (
                    id, board_id, name, goal, start_date, end_date, status, closed_at,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(iteration.id.to_string())
        .bind(iteration.board_id.to_string())
        .bind(&iteration.name)
        .bind(&iteration.goal)
        .bind(iteration.start_date.map(|dt| dt.timestamp()))
        .bind(iteration.end_date.map(|dt| dt.timestamp()))
        .bind(iteration.status.as_str())
        .bind(iteration.closed_at.map(|dt| dt.timestamp()))
        .bind(iteration.created_at.timestamp())
        .bind(iteration.updated_at.timestamp())
        .bind(iteration.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, iteration: &Iteration) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE pm_iterations
                SET name = ?, goal = ?, start_date = ?, end_date = ?,
                    status = ?, closed_at = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&iteration.name)
        .bind(&iteration.goal)
        .bind(iteration.start_date.map(|dt| dt.timestamp()))
        .bind(iteration.end_date.map(|dt| dt.timestamp()))
        .bind(iteration.status.as_str())
        .bind(iteration.closed_at.map(|dt| dt.timestamp()))
        .bind(iteration.updated_at.timestamp())
        .bind(iteration.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Iteration>> {
        let sql = format!(
            "SELECT {} FROM pm_iterations WHERE id = ? AND deleted_at IS NULL",
            ITERATION_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_iteration).transpose()
    }

    /// Most recently closed first; `offset` pages further back in history
    pub async fn find_recently_closed(
        &self,
        board_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<Vec<Iteration>> {
        let sql = format!(
            r#"
                SELECT {} FROM pm_iterations
                WHERE board_id = ? AND status = ? AND deleted_at IS NULL
                ORDER BY COALESCE(closed_at, end_date, created_at) DESC, id DESC
                LIMIT ? OFFSET ?
            "#,
            ITERATION_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(board_id.to_string())
            .bind(IterationStatus::Closed.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_iteration).collect()
    }

    /// Active iterations across all boards
    pub async fn find_active(&self) -> DbErrorResult<Vec<Iteration>> {
        let sql = format!(
            r#"
                SELECT {} FROM pm_iterations
                WHERE status = ? AND deleted_at IS NULL
                ORDER BY board_id, id
            "#,
            ITERATION_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(IterationStatus::Active.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_iteration).collect()
    }
}

fn map_iteration(r: &SqliteRow) -> DbErrorResult<Iteration> {
    let status: String = r.try_get("status")?;

    Ok(Iteration {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "iteration.id")?,
        board_id: parse_uuid(&r.try_get::<String, _>("board_id")?, "iteration.board_id")?,
        name: r.try_get("name")?,
        goal: r.try_get("goal")?,
        start_date: parse_optional_timestamp(r.try_get("start_date")?, "iteration.start_date")?,
        end_date: parse_optional_timestamp(r.try_get("end_date")?, "iteration.end_date")?,
        status: IterationStatus::from_str(&status)
            .map_err(|e| decode_error("iteration.status", e.to_string()))?,
        closed_at: parse_optional_timestamp(r.try_get("closed_at")?, "iteration.closed_at")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "iteration.created_at")?,
        updated_at: parse_timestamp(r.try_get("updated_at")?, "iteration.updated_at")?,
        deleted_at: parse_optional_timestamp(r.try_get("deleted_at")?, "iteration.deleted_at")?,
    })
}
