use crate::{AuditAction, EntityKind, ItemStateBlob, IterationPayload, MovePayload};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const EMPTY_METADATA: &str = "{}";

/// Immutable, append-only audit record.
///
/// `sequence` is assigned by the store on insert and breaks ties between
/// events sharing the same `occurred_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub sequence: i64,
    pub occurred_at: DateTime<Utc>,
    pub actor_id: Option<Uuid>,

    pub action: AuditAction,
    pub entity_kind: EntityKind,
    pub entity_id: Uuid,

    // Scoping
    pub organization_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub board_id: Option<Uuid>,

    // Raw JSON blobs
    pub state_before: Option<String>,
    pub state_after: Option<String>,
    pub metadata: String,
}

impl AuditEvent {
    pub fn new(action: AuditAction, entity_kind: EntityKind, entity_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence: 0,
            occurred_at: Utc::now(),
            actor_id: None,
            action,
            entity_kind,
            entity_id,
            organization_id: None,
            project_id: None,
            board_id: None,
            state_before: None,
            state_after: None,
            metadata: EMPTY_METADATA.to_string(),
        }
    }

    pub fn created(item_id: Uuid, board_id: Uuid, state: &ItemStateBlob) -> Self {
        let mut event = Self::new(AuditAction::Created, EntityKind::WorkItem, item_id);
        event.board_id = Some(board_id);
        event.state_after = Some(state.to_json());
        event
    }

    pub fn deleted(item_id: Uuid, board_id: Uuid, state: &ItemStateBlob) -> Self {
        let mut event = Self::new(AuditAction::Deleted, EntityKind::WorkItem, item_id);
        event.board_id = Some(board_id);
        event.state_before = Some(state.to_json());
        event
    }

    pub fn moved(item_id: Uuid, board_id: Uuid, from_column_id: Uuid, to_column_id: Uuid) -> Self {
        let mut event = Self::new(AuditAction::Moved, EntityKind::WorkItem, item_id);
        event.board_id = Some(board_id);
        event.metadata = MovePayload {
            from_column_id,
            to_column_id,
        }
        .to_json();
        event
    }

    pub fn added_to_iteration(item_id: Uuid, board_id: Uuid, iteration_id: Uuid) -> Self {
        let mut event = Self::new(AuditAction::AddedToIteration, EntityKind::WorkItem, item_id);
        event.board_id = Some(board_id);
        event.metadata = IterationPayload { iteration_id }.to_json();
        event
    }

    pub fn removed_from_iteration(
        item_id: Uuid,
        board_id: Uuid,
        iteration_id: Uuid,
        state_before: Option<&ItemStateBlob>,
    ) -> Self {
        let mut event = Self::new(
            AuditAction::RemovedFromIteration,
            EntityKind::WorkItem,
            item_id,
        );
        event.board_id = Some(board_id);
        event.metadata = IterationPayload { iteration_id }.to_json();
        event.state_before = state_before.map(ItemStateBlob::to_json);
        event
    }

    /// Override the occurrence time (backfills and fixtures)
    pub fn at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    pub fn by(mut self, actor_id: Uuid) -> Self {
        self.actor_id = Some(actor_id);
        self
    }
}
