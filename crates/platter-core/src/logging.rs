//! Tracing subscriber setup.
//!
//! The filter comes from `PLATTER_LOG` and falls back to the configured
//! `log_level`. The TUI owns the terminal, so it logs to a file under
//! `$PLATTER_HOME/logs`; headless commands log to stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "PLATTER_LOG";
pub const LOG_FILE_NAME: &str = "platter.log";

fn env_filter(fallback: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).with_context(|| format!("Invalid log level '{fallback}'"))
}

/// Installs a stderr subscriber.
pub fn init_stderr(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(level)?)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Installs a subscriber writing to `<dir>/platter.log`.
///
/// Logs are flushed by a background worker until the returned guard drops.
pub fn init_file(dir: &Path, level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(level)?)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
