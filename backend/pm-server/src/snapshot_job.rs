//! Periodic daily snapshot recording for every active iteration.

use pm_metrics::{MetricsService, RecordSummary};

use std::time::Duration;

use log::{error, info};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const SECONDS_PER_HOUR: u64 = 3600;

/// Spawn the snapshot loop; the first run happens immediately
pub fn spawn(metrics: MetricsService, interval_hours: u64) -> JoinHandle<()> {
    let period = snapshot_period(interval_hours);
    info!("Snapshot job enabled: every {}s", period.as_secs());

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            run_once(&metrics).await;
        }
    })
}

/// Tick period for `interval_hours`, at least one hour. Saturates instead
/// of overflowing for intervals config validation would have rejected.
pub fn snapshot_period(interval_hours: u64) -> Duration {
    Duration::from_secs(interval_hours.max(1).saturating_mul(SECONDS_PER_HOUR))
}

/// Record today's snapshot for all active iterations, logging the outcome
pub async fn run_once(metrics: &MetricsService) -> Option<RecordSummary> {
    match metrics.record_active().await {
        Ok(summary) => {
            info!(
                "Snapshot run complete: {} recorded, {} failed",
                summary.recorded, summary.failed
            );
            Some(summary)
        }
        Err(e) => {
            error!("Snapshot run failed: {}", e);
            None
        }
    }
}
