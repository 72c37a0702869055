
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Every override `Config::load` reads
const OVERRIDE_VARS: [&str; 12] = [
    "PM_SERVER_HOST",
    "PM_SERVER_PORT",
    "PM_DATABASE_PATH",
    "PM_DATABASE_MAX_CONNECTIONS",
    "PM_LOG_LEVEL",
    "PM_LOG_COLORED",
    "PM_LOG_FILE",
    "PM_METRICS_DEFAULT_ITERATION_DAYS",
    "PM_METRICS_MAX_EVENTS",
    "PM_METRICS_DEFAULT_VELOCITY_ITERATIONS",
    "PM_METRICS_SNAPSHOT_INTERVAL_HOURS",
    "PM_METRICS_MAX_CHART_DAYS",
];

/// Create a temp config directory, point PM_CONFIG_DIR at it and clear any
/// PM_* overrides inherited from the shell
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();
    guards.push(EnvGuard::set(
        "PM_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}
