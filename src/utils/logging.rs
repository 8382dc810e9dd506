//! Console and rolling-file logging

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "pair-tracker.log";

/// Installs the global subscriber: coloured console output plus an hourly
/// rolling file under `log_dir`. `RUST_LOG` overrides the `info` default.
///
/// File lines are written on a background thread until the returned guard is dropped.
pub fn setup_logging(log_dir: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir))?;

    let file_appender = tracing_appender::rolling::hourly(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_target(false).with_ansi(true);
    let file = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    Ok(guard)
}
