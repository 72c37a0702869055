pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod snapshot_job;

#[cfg(test)]
mod tests;

pub use api::{
    chart_query::{ChartQuery, VelocityQuery},
    charts::{get_burn_down, get_burn_up, get_cumulative_flow, get_velocity, record_snapshot},
    error::ApiError,
    error::Result as ApiResult,
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
