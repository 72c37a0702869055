use crate::MeasurementMode;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// One column's band of a cumulative flow diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSeries {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub values: Vec<i64>,
}

/// `values[i]` of every series belongs to `dates[i]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativeFlowChart {
    pub iteration_id: Uuid,
    pub mode: MeasurementMode,
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<FlowSeries>,
}
