use crate::{AuditAction, EntityKind};

use std::str::FromStr;

#[test]
fn test_audit_action_round_trips_through_str() {
    let all = [
        AuditAction::Created,
        AuditAction::Updated,
        AuditAction::Deleted,
        AuditAction::Moved,
        AuditAction::AddedToIteration,
        AuditAction::RemovedFromIteration,
        AuditAction::Create,
        AuditAction::Update,
        AuditAction::Delete,
    ];

    for action in all {
        assert_eq!(AuditAction::from_str(action.as_str()).unwrap(), action);
    }
}

#[test]
fn test_audit_action_rejects_unknown_kind() {
    assert!(AuditAction::from_str("archived").is_err());
    assert!(AuditAction::from_str("MOVED").is_err());
}

#[test]
fn test_entity_kind_from_str() {
    assert_eq!(
        EntityKind::from_str("work_item").unwrap(),
        EntityKind::WorkItem
    );
    assert_eq!(EntityKind::from_str("board").unwrap(), EntityKind::Board);
    assert!(EntityKind::from_str("card").is_err());
}
