use crate::Result as DbErrorResult;
use crate::decode::{parse_optional_timestamp, parse_optional_uuid, parse_timestamp, parse_uuid};

use pm_core::WorkItem;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct WorkItemRepository {
    pool: SqlitePool,
}

impl WorkItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, work_item: &WorkItem) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO pm_work_items (
                    id, board_id, column_id, iteration_id, title, story_points, position,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(work_item.id.to_string())
        .bind(work_item.board_id.to_string())
        .bind(work_item.column_id.to_string())
        .bind(work_item.iteration_id.map(|id| id.to_string()))
        .bind(&work_item.title)
        .bind(work_item.story_points)
        .bind(work_item.position)
        .bind(work_item.created_at.timestamp())
        .bind(work_item.updated_at.timestamp())
        .bind(work_item.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, work_item: &WorkItem) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE pm_work_items
                SET column_id = ?, iteration_id = ?, title = ?, story_points = ?,
                    position = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(work_item.column_id.to_string())
        .bind(work_item.iteration_id.map(|id| id.to_string()))
        .bind(&work_item.title)
        .bind(work_item.story_points)
        .bind(work_item.position)
        .bind(work_item.updated_at.timestamp())
        .bind(work_item.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE pm_work_items
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

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<WorkItem>> {
        let row = sqlx::query(
            r#"
                SELECT id, board_id, column_id, iteration_id, title, story_points, position,
                       created_at, updated_at, deleted_at
                FROM pm_work_items
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_work_item).transpose()
    }

    pub async fn find_by_iteration(&self, iteration_id: Uuid) -> DbErrorResult<Vec<WorkItem>> {
        let rows = sqlx::query(
            r#"
                SELECT id, board_id, column_id, iteration_id, title, story_points, position,
                       created_at, updated_at, deleted_at
                FROM pm_work_items
                WHERE iteration_id = ? AND deleted_at IS NULL
                ORDER BY position, id
            "#,
        )
        .bind(iteration_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_work_item).collect()
    }
}

fn map_work_item(r: &SqliteRow) -> DbErrorResult<WorkItem> {
    Ok(WorkItem {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "work_item.id")?,
        board_id: parse_uuid(&r.try_get::<String, _>("board_id")?, "work_item.board_id")?,
        column_id: parse_uuid(&r.try_get::<String, _>("column_id")?, "work_item.column_id")?,
        iteration_id: parse_optional_uuid(r.try_get("iteration_id")?, "work_item.iteration_id")?,
        title: r.try_get("title")?,
        story_points: r.try_get("story_points")?,
        position: r.try_get("position")?,
        created_at: parse_timestamp(r.try_get("created_at")?, "work_item.created_at")?,
        updated_at: parse_timestamp(r.try_get("updated_at")?, "work_item.updated_at")?,
        deleted_at: parse_optional_timestamp(r.try_get("deleted_at")?, "work_item.deleted_at")?,
    })
}
