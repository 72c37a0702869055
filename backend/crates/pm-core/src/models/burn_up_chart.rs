use crate::{ChartPoint, MeasurementMode};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Scoped vs completed work, one point per day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnUpChart {
    pub iteration_id: Uuid,
    pub iteration_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub mode: MeasurementMode,
    pub scope: Vec<ChartPoint>,
    pub done: Vec<ChartPoint>,
}
