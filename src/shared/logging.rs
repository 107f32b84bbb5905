//! File-based tracing setup.
//!
//! The TUI owns stdout/stderr, so log lines go to
//! `$XDG_CACHE_HOME/ghlookup/ghlookup.log` as JSON.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::shared::config::LogConfig;
use crate::shared::dirs;

pub const LOG_FILE_NAME: &str = "ghlookup.log";

/// Install the global subscriber. The returned guard must be held until exit
/// so buffered lines are flushed. Returns `None` when no log directory can be
/// resolved or created; the program then runs without logging.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let dir = dirs::log_dir()?;
    init_in_dir(&dir, config)
}

fn init_in_dir(dir: &Path, config: &LogConfig) -> Option<WorkerGuard> {
    std::fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().json().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(layer)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Parse a filter directive, falling back to `info` when it is invalid.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
