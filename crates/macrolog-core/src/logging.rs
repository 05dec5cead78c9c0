//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a daily-rolling file under
//! `${MACROLOG_HOME}/logs/`. `MACROLOG_LOG` overrides the configured filter.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

pub const LOG_ENV: &str = "MACROLOG_LOG";
const LOG_FILE_PREFIX: &str = "macrolog.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// The returned guard flushes buffered events on drop; hold it until exit.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

pub fn init_in(dir: &Path, config: &Config) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(guard)
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| filter_from_level(&config.log_level))
}

fn filter_from_level(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
