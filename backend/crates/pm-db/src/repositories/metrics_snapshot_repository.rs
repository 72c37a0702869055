use crate::decode::{decode_error, parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use pm_core::{ColumnBreakdown, DailyMetricsSnapshot};

use std::collections::BTreeMap;
use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SNAPSHOT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct MetricsSnapshotRepository {
    pool: SqlitePool,
}

impl MetricsSnapshotRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace the snapshot for `(iteration_id, snapshot_date)`.
    ///
    /// A single statement, so concurrent writers for the same day never
    /// produce duplicate rows. The first row's id is kept on conflict.
    pub async fn upsert(&self, snapshot: &DailyMetricsSnapshot) -> DbErrorResult<()> {
        let breakdown =
            serde_json::to_string(&snapshot.columns).map_err(|e| DbError::Serialization {
                field: "daily_metrics_snapshot.column_breakdown",
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        sqlx::query(
            r#"
                INSERT INTO pm_daily_metrics_snapshots (
                    id, iteration_id, snapshot_date,
                    total_count, completed_count, total_points, completed_points,
                    column_breakdown, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(iteration_id, snapshot_date) DO UPDATE SET
                    total_count = excluded.total_count,
                    completed_count = excluded.completed_count,
                    total_points = excluded.total_points,
                    completed_points = excluded.completed_points,
                    column_breakdown = excluded.column_breakdown,
                    created_at = excluded.created_at
            "#,
        )
        .bind(snapshot.id.to_string())
        .bind(snapshot.iteration_id.to_string())
        .bind(snapshot.snapshot_date.format(SNAPSHOT_DATE_FORMAT).to_string())
        .bind(snapshot.total_count)
        .bind(snapshot.completed_count)
        .bind(snapshot.total_points)
        .bind(snapshot.completed_points)
        .bind(breakdown)
        .bind(snapshot.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All snapshots of an iteration, oldest day first
    pub async fn find_by_iteration(
        &self,
        iteration_id: Uuid,
    ) -> DbErrorResult<Vec<DailyMetricsSnapshot>> {
        let rows = sqlx::query(
            r#"
                SELECT id, iteration_id, snapshot_date,
                       total_count, completed_count, total_points, completed_points,
                       column_breakdown, created_at
                FROM pm_daily_metrics_snapshots
                WHERE iteration_id = ?
                ORDER BY snapshot_date ASC
            "#,
        )
        .bind(iteration_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_snapshot).collect()
    }

    pub async fn find_latest_by_iteration(
        &self,
        iteration_id: Uuid,
    ) -> DbErrorResult<Option<DailyMetricsSnapshot>> {
        let row = sqlx::query(
            r#"
                SELECT id, iteration_id, snapshot_date,
                       total_count, completed_count, total_points, completed_points,
                       column_breakdown, created_at
                FROM pm_daily_metrics_snapshots
                WHERE iteration_id = ?
                ORDER BY snapshot_date DESC
                LIMIT 1
            "#,
        )
        .bind(iteration_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_snapshot).transpose()
    }
}

fn map_snapshot(r: &SqliteRow) -> DbErrorResult<DailyMetricsSnapshot> {
    let snapshot_date: String = r.try_get("snapshot_date")?;
    let breakdown: String = r.try_get("column_breakdown")?;

    let columns: BTreeMap<Uuid, ColumnBreakdown> =
        serde_json::from_str(&breakdown).map_err(|e| DbError::Serialization {
            field: "daily_metrics_snapshot.column_breakdown",
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(DailyMetricsSnapshot {
        id: parse_uuid(&r.try_get::<String, _>("id")?, "daily_metrics_snapshot.id")?,
        iteration_id: parse_uuid(
            &r.try_get::<String, _>("iteration_id")?,
            "daily_metrics_snapshot.iteration_id",
        )?,
        snapshot_date: NaiveDate::parse_from_str(&snapshot_date, SNAPSHOT_DATE_FORMAT)
            .map_err(|e| decode_error("daily_metrics_snapshot.snapshot_date", e.to_string()))?,
        total_count: r.try_get("total_count")?,
        completed_count: r.try_get("completed_count")?,
        total_points: r.try_get("total_points")?,
        completed_points: r.try_get("completed_points")?,
        columns,
        created_at: parse_timestamp(r.try_get("created_at")?, "daily_metrics_snapshot.created_at")?,
    })
}
