use pm_metrics::{MetricsService, MetricsSettings};
use pm_server::{AppState, ServerError, build_router, logger, snapshot_job};

use std::error::Error;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // PM_* overrides may live in a local .env
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting pm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Install the Prometheus recorder before any counters are touched
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::MetricsRecorder {
            message: e.to_string(),
        })?;

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = pm_db::connect(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;
    info!("Database connection established");

    let settings = MetricsSettings {
        default_iteration_days: config.metrics.default_iteration_days,
        max_events: config.metrics.max_events,
        default_velocity_iterations: config.metrics.default_velocity_iterations,
        max_chart_days: config.metrics.max_chart_days,
    };
    let metrics = MetricsService::sqlite(pool.clone(), settings);

    let snapshot_task = if config.metrics.snapshot_interval_hours > 0 {
        Some(snapshot_job::spawn(
            metrics.clone(),
            config.metrics.snapshot_interval_hours,
        ))
    } else {
        warn!("Snapshot job disabled (snapshot_interval_hours = 0)");
        None
    };

    // Build router
    let app_state = AppState::new(pool, metrics).with_prometheus(prometheus);
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    if let Some(task) = snapshot_task {
        task.abort();
    }
    info!("Graceful shutdown complete");

    Ok(())
}
