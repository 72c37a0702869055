pub mod chart_query;
pub mod charts;
pub mod error;
