use crate::Result as DbErrorResult;
use crate::decode::{parse_optional_timestamp, parse_optional_uuid, parse_timestamp, parse_uuid};

use pm_core::Board;

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct BoardRepository {
    pool: SqlitePool,
}

impl BoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, board: &Board) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pm_boards (id, project_id, name, created_at, updated_at, deleted_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(board.id.to_string())
        .bind(board.project_id.map(|id| id.to_string()))
        .bind(&board.name)
        .bind(board.created_at.timestamp())
        .bind(board.updated_at.timestamp())
        .bind(board.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Board>> {
        let row = sqlx::query(
            r#"
                SELECT id, project_id, name, created_at, updated_at, deleted_at
                FROM pm_boards
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<Board> {
            Ok(Board {
                id: parse_uuid(&r.try_get::<String, _>("id")?, "board.id")?,
                project_id: parse_optional_uuid(r.try_get("project_id")?, "board.project_id")?,
                name: r.try_get("name")?,
                created_at: parse_timestamp(r.try_get("created_at")?, "board.created_at")?,
                updated_at: parse_timestamp(r.try_get("updated_at")?, "board.updated_at")?,
                deleted_at: parse_optional_timestamp(r.try_get("deleted_at")?, "board.deleted_at")?,
            })
        })
        .transpose()
    }
}
