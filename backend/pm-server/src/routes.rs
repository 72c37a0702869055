use crate::{
    AppState, get_burn_down, get_burn_up, get_cumulative_flow, get_velocity, health,
    record_snapshot,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    // Configure CORS for the board frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Chart endpoints
        .route("/api/v1/iterations/{id}/burndown", get(get_burn_down))
        .route("/api/v1/iterations/{id}/burnup", get(get_burn_up))
        .route(
            "/api/v1/iterations/{id}/cumulative-flow",
            get(get_cumulative_flow),
        )
        .route("/api/v1/iterations/{id}/snapshots", post(record_snapshot))
        .route("/api/v1/boards/{id}/velocity", get(get_velocity))
        // Health and monitoring
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::prometheus_metrics))
        .with_state(state)
        .layer(cors)
}
