use crate::error::{Result as ServerErrorResult, ServerError};

use pm_config::LoggingConfig;

use std::fmt::Arguments;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Crates whose debug output drowns out the chart engine
const NOISY_TARGETS: [&str; 3] = ["sqlx", "hyper", "tower_http"];

/// Initialize logger with fern
///
/// Logs go to `log_file` when set, otherwise to stdout (colored when the
/// config asks for it).
#[track_caller]
pub fn initialize(config: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level_filter = *config.level;

    let mut base_dispatch = Dispatch::new().level(level_filter);
    for target in NOISY_TARGETS {
        base_dispatch = base_dispatch.level_for(target, level_filter.min(LevelFilter::Warn));
    }

    let dispatch = match log_file.as_deref() {
        Some(log_path) => file_dispatch(log_path)?,
        None if config.colored => colored_dispatch(),
        // Plain output for non-TTY (systemd, docker logs)
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn file_dispatch(log_path: &Path) -> ServerErrorResult<Dispatch> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", log_path.display(), e),
        })?;

    Ok(Dispatch::new()
        .format(|out, message, record| write_line(out, message, record, record.level()))
        .chain(file))
}

fn colored_dispatch() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            write_line(out, message, record, colors.color(record.level()))
        })
        .chain(std::io::stdout())
}

fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: impl std::fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
