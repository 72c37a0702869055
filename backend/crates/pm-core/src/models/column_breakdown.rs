use crate::MeasurementMode;

use serde::{Deserialize, Serialize};

/// One column's share of a daily snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBreakdown {
    pub name: String,
    pub count: i64,
    pub points: i64,
}

impl ColumnBreakdown {
    pub fn value(&self, mode: MeasurementMode) -> i64 {
        mode.select(self.count, self.points)
    }
}
