//! Typed views over the JSON blobs carried by audit events.
//!
//! Audit rows store metadata and before/after state as opaque JSON text.
//! Each payload here knows how to parse itself out of that text; a parse
//! failure yields `None` so callers can treat old or damaged records as
//! no-ops instead of failing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata of a `moved` event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePayload {
    pub from_column_id: Uuid,
    pub to_column_id: Uuid,
}

impl MovePayload {
    pub fn parse(metadata: &str) -> Option<Self> {
        serde_json::from_str(metadata).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "from_column_id": self.from_column_id,
            "to_column_id": self.to_column_id,
        })
        .to_string()
    }
}

/// Metadata of `added_to_iteration` / `removed_from_iteration` events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationPayload {
    #[serde(alias = "sprint_id")]
    pub iteration_id: Uuid,
}

impl IterationPayload {
    pub fn parse(metadata: &str) -> Option<Self> {
        serde_json::from_str(metadata).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "iteration_id": self.iteration_id }).to_string()
    }
}

/// The subset of a work item's serialized state that replay needs.
///
/// Unknown fields are ignored so full work item snapshots parse too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStateBlob {
    pub column_id: Uuid,
    #[serde(default, alias = "weight")]
    pub story_points: Option<i32>,
    #[serde(default, alias = "sprint_id")]
    pub iteration_id: Option<Uuid>,
}

impl ItemStateBlob {
    pub fn parse(state: &str) -> Option<Self> {
        serde_json::from_str(state).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "column_id": self.column_id,
            "story_points": self.story_points,
            "iteration_id": self.iteration_id,
        })
        .to_string()
    }
}
