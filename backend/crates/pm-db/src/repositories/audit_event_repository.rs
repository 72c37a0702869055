use crate::Result as DbErrorResult;
use crate::decode::{parse_optional_uuid, parse_timestamp, parse_uuid};

use pm_core::{AuditAction, AuditEvent, EntityKind};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::warn;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Read/append access to the audit log.
///
/// Events are never updated or deleted through this repository.
#[derive(Clone)]
pub struct AuditEventRepository {
    pool: SqlitePool,
}

impl AuditEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an event and return its assigned sequence number
    pub async fn append(&self, event: &AuditEvent) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT INTO pm_audit_events (
                    id, occurred_at, actor_id, action, entity_kind, entity_id,
                    organization_id, project_id, board_id,
                    state_before, state_after, metadata
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(event.id.to_string())
        .bind(event.occurred_at.timestamp())
        .bind(event.actor_id.map(|id| id.to_string()))
        .bind(event.action.as_str())
        .bind(event.entity_kind.as_str())
        .bind(event.entity_id.to_string())
        .bind(event.organization_id.map(|id| id.to_string()))
        .bind(event.project_id.map(|id| id.to_string()))
        .bind(event.board_id.map(|id| id.to_string()))
        .bind(&event.state_before)
        .bind(&event.state_after)
        .bind(&event.metadata)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Work item events of a board with `start <= occurred_at < end`,
    /// oldest first. When more than `limit` rows match, the newest `limit`
    /// are returned.
    pub async fn find_work_item_events_for_board(
        &self,
        board_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: i64,
    ) -> DbErrorResult<Vec<AuditEvent>> {
        let rows = sqlx::query(
            r#"
                SELECT * FROM (
                    SELECT sequence, id, occurred_at, actor_id, action, entity_kind, entity_id,
                           organization_id, project_id, board_id,
                           state_before, state_after, metadata
                    FROM pm_audit_events
                    WHERE board_id = ? AND entity_kind = ?
                      AND occurred_at >= ? AND occurred_at < ?
                    ORDER BY occurred_at DESC, sequence DESC
                    LIMIT ?
                )
                ORDER BY occurred_at ASC, sequence ASC
            "#,
        )
        .bind(board_id.to_string())
        .bind(EntityKind::WorkItem.as_str())
        .bind(start.timestamp())
        .bind(end.timestamp())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut events = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(event) = map_audit_event(row)? {
                events.push(event);
            }
        }

        Ok(events)
    }
}

/// `Ok(None)` for rows written by newer services with kinds this build
/// does not know.
fn map_audit_event(r: &SqliteRow) -> DbErrorResult<Option<AuditEvent>> {
    let id: String = r.try_get("id")?;
    let action: String = r.try_get("action")?;
    let entity_kind: String = r.try_get("entity_kind")?;

    let Ok(action) = AuditAction::from_str(&action) else {
        warn!("Skipping audit event {} with unknown action '{}'", id, action);
        return Ok(None);
    };
    let Ok(entity_kind) = EntityKind::from_str(&entity_kind) else {
        warn!(
            "Skipping audit event {} with unknown entity kind '{}'",
            id, entity_kind
        );
        return Ok(None);
    };

    Ok(Some(AuditEvent {
        id: parse_uuid(&id, "audit_event.id")?,
        sequence: r.try_get("sequence")?,
        occurred_at: parse_timestamp(r.try_get("occurred_at")?, "audit_event.occurred_at")?,
        actor_id: parse_optional_uuid(r.try_get("actor_id")?, "audit_event.actor_id")?,
        action,
        entity_kind,
        entity_id: parse_uuid(&r.try_get::<String, _>("entity_id")?, "audit_event.entity_id")?,
        organization_id: parse_optional_uuid(
            r.try_get("organization_id")?,
            "audit_event.organization_id",
        )?,
        project_id: parse_optional_uuid(r.try_get("project_id")?, "audit_event.project_id")?,
        board_id: parse_optional_uuid(r.try_get("board_id")?, "audit_event.board_id")?,
        state_before: r.try_get("state_before")?,
        state_after: r.try_get("state_after")?,
        metadata: r.try_get("metadata")?,
    }))
}
