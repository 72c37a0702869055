mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod metrics_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use metrics_config::MetricsConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Metrics
const DEFAULT_ITERATION_DAYS: i64 = 14;
const MIN_ITERATION_DAYS: i64 = 1;
const MAX_ITERATION_DAYS: i64 = 365;
const DEFAULT_MAX_EVENTS: i64 = 10_000;
const DEFAULT_VELOCITY_ITERATIONS: u32 = 5;
pub const MAX_VELOCITY_ITERATIONS: u32 = 50;
const DEFAULT_SNAPSHOT_INTERVAL_HOURS: u64 = 24;
const MAX_SNAPSHOT_INTERVAL_HOURS: u64 = 24 * 365;
const DEFAULT_MAX_CHART_DAYS: u32 = 366;
