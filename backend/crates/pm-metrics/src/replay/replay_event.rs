use pm_core::{AuditAction, AuditEvent, EntityKind, ItemStateBlob, IterationPayload, MovePayload};

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use uuid::Uuid;

/// What undoing an event does to the working state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChange {
    Moved {
        from_column_id: Uuid,
    },
    Created,
    Deleted {
        before: Option<ItemStateBlob>,
    },
    AddedToIteration {
        iteration_id: Uuid,
    },
    RemovedFromIteration {
        iteration_id: Uuid,
        before: Option<ItemStateBlob>,
    },
    /// Kinds replay does not track, and events whose payload did not parse
    Ignored,
}

/// An audit event with its JSON payloads already decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayEvent {
    pub item_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sequence: i64,
    pub change: ReplayChange,
}

impl ReplayEvent {
    pub fn new(
        item_id: Uuid,
        occurred_at: DateTime<Utc>,
        sequence: i64,
        change: ReplayChange,
    ) -> Self {
        Self {
            item_id,
            occurred_at,
            sequence,
            change,
        }
    }

    /// Decode an audit event. Returns `None` for events about anything other
    /// than work items.
    pub fn from_audit(event: &AuditEvent) -> Option<Self> {
        if event.entity_kind != EntityKind::WorkItem {
            return None;
        }

        let change = match event.action {
            AuditAction::Moved => match MovePayload::parse(&event.metadata) {
                Some(payload) => ReplayChange::Moved {
                    from_column_id: payload.from_column_id,
                },
                None => {
                    warn!(
                        "Ignoring moved event {} for item {}: unreadable metadata",
                        event.id, event.entity_id
                    );
                    ReplayChange::Ignored
                }
            },
            AuditAction::Created => ReplayChange::Created,
            AuditAction::Deleted => ReplayChange::Deleted {
                before: parse_blob(event, event.state_before.as_deref()),
            },
            AuditAction::AddedToIteration => match IterationPayload::parse(&event.metadata) {
                Some(payload) => ReplayChange::AddedToIteration {
                    iteration_id: payload.iteration_id,
                },
                None => {
                    warn!(
                        "Ignoring added_to_iteration event {}: unreadable metadata",
                        event.id
                    );
                    ReplayChange::Ignored
                }
            },
            AuditAction::RemovedFromIteration => match IterationPayload::parse(&event.metadata) {
                Some(payload) => ReplayChange::RemovedFromIteration {
                    iteration_id: payload.iteration_id,
                    before: parse_blob(event, event.state_before.as_deref()),
                },
                None => {
                    warn!(
                        "Ignoring removed_from_iteration event {}: unreadable metadata",
                        event.id
                    );
                    ReplayChange::Ignored
                }
            },
            AuditAction::Updated | AuditAction::Create | AuditAction::Update | AuditAction::Delete => {
                ReplayChange::Ignored
            }
        };

        Some(Self::new(
            event.entity_id,
            event.occurred_at,
            event.sequence,
            change,
        ))
    }

    /// Decode every work item event of a batch, preserving order
    pub fn from_audit_events(events: &[AuditEvent]) -> Vec<Self> {
        events.iter().filter_map(Self::from_audit).collect()
    }

    /// UTC calendar day the event happened on
    pub fn day(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }
}

fn parse_blob(event: &AuditEvent, state: Option<&str>) -> Option<ItemStateBlob> {
    let raw = state?;
    let blob = ItemStateBlob::parse(raw);
    if blob.is_none() {
        warn!(
            "Event {} for item {} carries an unreadable state blob",
            event.id, event.entity_id
        );
    }
    blob
}
