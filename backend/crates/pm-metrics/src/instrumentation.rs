use std::time::Duration;

use metrics::{counter, histogram};

/// Counters and timings for chart computation
#[derive(Clone)]
pub struct ChartMetrics {
    prefix: &'static str,
}

impl ChartMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "pm_metrics",
        }
    }

    /// Record a finished chart request
    pub fn chart_computed(&self, chart: &str, duration: Duration) {
        counter!(format!("{}.charts.computed", self.prefix)).increment(1);
        counter!(format!("{}.charts.computed.{}", self.prefix, chart)).increment(1);
        histogram!(format!("{}.charts.latency_ms.{}", self.prefix, chart))
            .record(duration.as_millis() as f64);
    }

    /// Record how many audit events one replay walked back through
    pub fn events_replayed(&self, count: usize) {
        histogram!(format!("{}.replay.events", self.prefix)).record(count as f64);
    }

    /// Record that the event fetch guard truncated a window
    pub fn event_cap_reached(&self) {
        counter!(format!("{}.replay.event_cap_reached", self.prefix)).increment(1);
    }

    /// Record that a burn chart was cut off at the day cap
    pub fn day_cap_reached(&self) {
        counter!(format!("{}.replay.day_cap_reached", self.prefix)).increment(1);
    }

    pub fn snapshot_recorded(&self) {
        counter!(format!("{}.snapshots.recorded", self.prefix)).increment(1);
    }

    pub fn snapshot_failed(&self) {
        counter!(format!("{}.snapshots.failed", self.prefix)).increment(1);
    }
}

impl Default for ChartMetrics {
    fn default() -> Self {
        Self::new()
    }
}
