use crate::Result as DbErrorResult;
use crate::decode::{parse_optional_timestamp, parse_timestamp, parse_uuid};

use pm_core::Column;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct ColumnRepository {
    pool: SqlitePool,
}

impl ColumnRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, column: &Column) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pm_columns (
                    id, board_id, name, color, position, is_done, is_hidden,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.name)
        .bind(&column.color)
        .bind(column.position)
        .bind(column.is_done)
        .bind(column.is_hidden)
        .bind(column.created_at.timestamp())
        .bind(column.updated_at.timestamp())
        .bind(column.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Live columns of a board in display order
    pub async fn find_by_board(&self, board_id: Uuid) -> DbErrorResult<Vec<Column>> {
        let rows = sqlx::query(
            r#"
                SELECT id, board_id, name, color, position, is_done, is_hidden,
                       created_at, updated_at, deleted_at
                FROM pm_columns
                WHERE board_id = ? AND deleted_at IS NULL
                ORDER BY position, id
            "#,
        )
        .bind(board_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_column).collect()
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE pm_columns
                SET deleted_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(deleted_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn map_column(r: &SqliteRow) -> DbErrorResult<Column> {
    Ok(Column {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "column.id")?,
        board_id: parse_uuid(&r.try_get::<String, _>("board_id")?, "column.board_id")?,
        name: r.try_get("name")?,
        color: r.try_get("color")?,
        position: r.try_get("position")?,
        is_done: r.try_get("is_done")?,
        is_hidden: r.try_get("is_hidden")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "column.created_at")?,
        updated_at: parse_timestamp(r.try_get("updated_at")?, "column.updated_at")?,
        deleted_at: parse_optional_timestamp(r.try_get("deleted_at")?, "column.deleted_at")?,
    })
}
