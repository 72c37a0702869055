//! Backward replay of the audit log.
//!
//! Reconstruction starts from the live state of an iteration's items and
//! walks the event log from newest to oldest, undoing each event, to recover
//! how the items looked at the end of earlier days. The working map is owned
//! by a single call and never shared.
//!
//! Events are undone in `(occurred_at, sequence)` descending order, so
//! several events on the same item and day unwind in exact reverse of the
//! order they were recorded.

use crate::{ItemState, ItemStateMap, ReplayChange, ReplayEvent};

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Item states as of the end of `day`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySnapshot {
    pub day: NaiveDate,
    pub items: ItemStateMap,
}

impl DaySnapshot {
    /// Items that count toward the iteration on this day
    pub fn in_iteration(&self) -> impl Iterator<Item = (&Uuid, &ItemState)> {
        self.items.iter().filter(|(_, state)| state.in_iteration)
    }
}

/// Undoes events for one iteration.
///
/// Membership events naming a different iteration are left alone.
#[derive(Debug, Clone, Copy)]
pub struct StateReconstructor {
    iteration_id: Uuid,
}

impl StateReconstructor {
    pub fn new(iteration_id: Uuid) -> Self {
        Self { iteration_id }
    }

    /// State at the end of each requested day, ascending by day.
    ///
    /// `events` may arrive in any order. Duplicate days collapse into one
    /// snapshot. The walk is a single pass: every event is undone at most
    /// once, before the first (latest) day it no longer belongs to.
    pub fn reconstruct_at(
        &self,
        current: &ItemStateMap,
        events: &[ReplayEvent],
        days: &[NaiveDate],
    ) -> Vec<DaySnapshot> {
        let newest_first = newest_first(events);

        let mut targets = days.to_vec();
        targets.sort_unstable();
        targets.dedup();

        let mut working = current.clone();
        let mut pending = newest_first.iter().peekable();
        let mut snapshots = Vec::with_capacity(targets.len());

        for &day in targets.iter().rev() {
            while let Some(event) = pending.next_if(|event| event.day() > day) {
                self.undo(&mut working, event);
            }
            snapshots.push(DaySnapshot {
                day,
                items: working.clone(),
            });
        }

        snapshots.reverse();
        snapshots
    }

    /// State at the end of the day containing `instant`
    pub fn state_at(
        &self,
        current: &ItemStateMap,
        events: &[ReplayEvent],
        instant: DateTime<Utc>,
    ) -> ItemStateMap {
        self.reconstruct_at(current, events, &[instant.date_naive()])
            .into_iter()
            .next()
            .map(|snapshot| snapshot.items)
            .unwrap_or_default()
    }

    /// Rewind `state` to just before `event` happened
    pub fn undo(&self, state: &mut ItemStateMap, event: &ReplayEvent) {
        match event.change {
            ReplayChange::Moved { from_column_id } => {
                if let Some(item) = state.get_mut(&event.item_id) {
                    item.column_id = from_column_id;
                }
            }
            ReplayChange::Created => {
                state.remove(&event.item_id);
            }
            ReplayChange::Deleted { before } => {
                if let Some(blob) = before {
                    let in_iteration = blob.iteration_id == Some(self.iteration_id);
                    state.insert(event.item_id, ItemState::from_blob(&blob, in_iteration));
                }
            }
            ReplayChange::AddedToIteration { iteration_id } => {
                if iteration_id != self.iteration_id {
                    return;
                }
                if let Some(item) = state.get_mut(&event.item_id) {
                    item.in_iteration = false;
                }
            }
            ReplayChange::RemovedFromIteration {
                iteration_id,
                before,
            } => {
                if iteration_id != self.iteration_id {
                    return;
                }
                match state.get_mut(&event.item_id) {
                    Some(item) => item.in_iteration = true,
                    None => {
                        if let Some(blob) = before {
                            state.insert(event.item_id, ItemState::from_blob(&blob, true));
                        }
                    }
                }
            }
            ReplayChange::Ignored => {}
        }
    }
}

fn newest_first(events: &[ReplayEvent]) -> Vec<ReplayEvent> {
    let mut ordered = events.to_vec();
    ordered.sort_by_key(|event| Reverse((event.occurred_at, event.sequence)));
    ordered
}
