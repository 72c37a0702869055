use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ITERATION_DAYS, DEFAULT_MAX_CHART_DAYS,
    DEFAULT_MAX_EVENTS, DEFAULT_SNAPSHOT_INTERVAL_HOURS, DEFAULT_VELOCITY_ITERATIONS,
    MAX_ITERATION_DAYS, MAX_SNAPSHOT_INTERVAL_HOURS, MAX_VELOCITY_ITERATIONS, MIN_ITERATION_DAYS,
};

use serde::Deserialize;

/// Chart engine settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Iteration length assumed when an iteration has no end date
    pub default_iteration_days: i64,

    /// Upper bound on audit events fetched for one chart request
    pub max_events: i64,

    /// Closed iterations shown by velocity when the request gives no count
    pub default_velocity_iterations: u32,

    /// Hours between scheduled snapshot runs (0 disables the job)
    pub snapshot_interval_hours: u64,

    /// Most days one burn chart replays; longer iterations are cut off
    pub max_chart_days: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            default_iteration_days: DEFAULT_ITERATION_DAYS,
            max_events: DEFAULT_MAX_EVENTS,
            default_velocity_iterations: DEFAULT_VELOCITY_ITERATIONS,
            snapshot_interval_hours: DEFAULT_SNAPSHOT_INTERVAL_HOURS,
            max_chart_days: DEFAULT_MAX_CHART_DAYS,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_ITERATION_DAYS..=MAX_ITERATION_DAYS).contains(&self.default_iteration_days) {
            return Err(ConfigError::metrics(format!(
                "metrics.default_iteration_days must be {}-{}, got {}",
                MIN_ITERATION_DAYS, MAX_ITERATION_DAYS, self.default_iteration_days
            )));
        }

        if self.max_events < 1 {
            return Err(ConfigError::metrics(format!(
                "metrics.max_events must be at least 1, got {}",
                self.max_events
            )));
        }

        if self.default_velocity_iterations < 1
            || self.default_velocity_iterations > MAX_VELOCITY_ITERATIONS
        {
            return Err(ConfigError::metrics(format!(
                "metrics.default_velocity_iterations must be 1-{}, got {}",
                MAX_VELOCITY_ITERATIONS, self.default_velocity_iterations
            )));
        }

        if self.snapshot_interval_hours > MAX_SNAPSHOT_INTERVAL_HOURS {
            return Err(ConfigError::metrics(format!(
                "metrics.snapshot_interval_hours must be 0-{}, got {}",
                MAX_SNAPSHOT_INTERVAL_HOURS, self.snapshot_interval_hours
            )));
        }

        if self.max_chart_days < 1 {
            return Err(ConfigError::metrics(format!(
                "metrics.max_chart_days must be at least 1, got {}",
                self.max_chart_days
            )));
        }

        Ok(())
    }
}
