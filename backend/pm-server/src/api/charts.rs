//! Chart REST API handlers
//!
//! Read-only views over the metrics engine, plus a manual trigger for the
//! daily snapshot that normally runs on a timer.

use crate::{AppState, ApiResult, ChartQuery, VelocityQuery};

use pm_core::{BurnDownChart, BurnUpChart, CumulativeFlowChart, DailyMetricsSnapshot, VelocityChart};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/iterations/:id/burndown
pub async fn get_burn_down(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> ApiResult<Json<BurnDownChart>> {
    let iteration_id = Uuid::parse_str(&id)?;
    let mode = query.measurement_mode()?;

    let chart = state.metrics.burn_down(iteration_id, mode).await?;
    Ok(Json(chart))
}

/// GET /api/v1/iterations/:id/burnup
pub async fn get_burn_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> ApiResult<Json<BurnUpChart>> {
    let iteration_id = Uuid::parse_str(&id)?;
    let mode = query.measurement_mode()?;

    let chart = state.metrics.burn_up(iteration_id, mode).await?;
    Ok(Json(chart))
}

/// GET /api/v1/iterations/:id/cumulative-flow
///
/// Records today's snapshot first when the iteration has none yet.
pub async fn get_cumulative_flow(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> ApiResult<Json<CumulativeFlowChart>> {
    let iteration_id = Uuid::parse_str(&id)?;
    let mode = query.measurement_mode()?;

    let chart = state.metrics.cumulative_flow(iteration_id, mode).await?;
    Ok(Json(chart))
}

/// POST /api/v1/iterations/:id/snapshots
///
/// Record (or overwrite) today's snapshot for the iteration
pub async fn record_snapshot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<DailyMetricsSnapshot>)> {
    let iteration_id = Uuid::parse_str(&id)?;

    let snapshot = state.metrics.record_daily_snapshot(iteration_id).await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/boards/:id/velocity
pub async fn get_velocity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<VelocityQuery>,
) -> ApiResult<Json<VelocityChart>> {
    let board_id = Uuid::parse_str(&id)?;
    let mode = query.measurement_mode()?;
    let count = query.iteration_count()?;

    let chart = state.metrics.velocity(board_id, count, mode).await?;
    Ok(Json(chart))
}
