use pm_metrics::MetricsService;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub metrics: MetricsService,
    /// Set when the Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(pool: SqlitePool, metrics: MetricsService) -> Self {
        Self {
            pool,
            metrics,
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
