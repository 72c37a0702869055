use crate::{ChartPoint, MeasurementMode};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Ideal vs actual remaining work, one point per day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnDownChart {
    pub iteration_id: Uuid,
    pub iteration_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub mode: MeasurementMode,
    pub ideal: Vec<ChartPoint>,
    pub actual: Vec<ChartPoint>,
}
