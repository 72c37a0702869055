mod chart_query;
mod error;
