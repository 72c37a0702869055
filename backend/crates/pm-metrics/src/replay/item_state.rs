use pm_core::{ItemStateBlob, MeasurementMode, WorkItem};

use std::collections::BTreeMap;

use uuid::Uuid;

/// A work item as replay sees it at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    pub column_id: Uuid,
    pub weight: Option<i32>,
    /// Whether the item counts toward the iteration being analyzed
    pub in_iteration: bool,
}

/// Item id to state. Ordered so every walk over it is deterministic.
pub type ItemStateMap = BTreeMap<Uuid, ItemState>;

impl ItemState {
    pub fn new(column_id: Uuid, weight: Option<i32>, in_iteration: bool) -> Self {
        Self {
            column_id,
            weight,
            in_iteration,
        }
    }

    /// Live item currently assigned to the analyzed iteration
    pub fn current(item: &WorkItem) -> Self {
        Self::new(item.column_id, item.story_points, true)
    }

    pub fn from_blob(blob: &ItemStateBlob, in_iteration: bool) -> Self {
        Self::new(blob.column_id, blob.story_points, in_iteration)
    }

    pub fn weight_in(&self, mode: MeasurementMode) -> i64 {
        mode.weight_of(self.weight)
    }
}

/// Current state of the iteration's live items
pub fn current_states(items: &[WorkItem]) -> ItemStateMap {
    items
        .iter()
        .map(|item| (item.id, ItemState::current(item)))
        .collect()
}
