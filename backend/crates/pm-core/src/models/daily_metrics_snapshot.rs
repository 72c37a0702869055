use crate::{ColumnBreakdown, MeasurementMode};

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate rollup of an iteration on one calendar day.
///
/// At most one exists per `(iteration_id, snapshot_date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricsSnapshot {
    pub id: Uuid,
    pub iteration_id: Uuid,
    pub snapshot_date: NaiveDate,

    pub total_count: i64,
    pub completed_count: i64,
    pub total_points: i64,
    pub completed_points: i64,

    pub columns: BTreeMap<Uuid, ColumnBreakdown>,

    pub created_at: DateTime<Utc>,
}

impl DailyMetricsSnapshot {
    pub fn new(iteration_id: Uuid, snapshot_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            iteration_id,
            snapshot_date,
            total_count: 0,
            completed_count: 0,
            total_points: 0,
            completed_points: 0,
            columns: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// A column's value on this day; columns absent from the breakdown are 0
    pub fn column_value(&self, column_id: Uuid, mode: MeasurementMode) -> i64 {
        self.columns
            .get(&column_id)
            .map(|breakdown| breakdown.value(mode))
            .unwrap_or(0)
    }
}
