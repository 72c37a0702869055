use crate::MeasurementMode;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VelocityEntry {
    pub iteration_id: Uuid,
    pub name: String,
    pub completed_count: i64,
    pub completed_points: i64,
}

impl VelocityEntry {
    pub fn completed(&self, mode: MeasurementMode) -> i64 {
        mode.select(self.completed_count, self.completed_points)
    }
}

/// Closed iterations, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VelocityChart {
    pub board_id: Uuid,
    pub mode: MeasurementMode,
    pub iterations: Vec<VelocityEntry>,
}
