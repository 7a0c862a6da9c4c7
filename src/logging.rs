//! File-based tracing setup. The terminal is owned by the TUI, so log lines go
//! to a daily rolling file instead of stdout.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,chef_menu_manager=debug";

/// Install the global subscriber writing to `<log_dir>/menu.<date>.log`.
///
/// The returned guard flushes buffered lines on drop, so keep it alive for the
/// whole program.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("menu")
        .filename_suffix("log")
        .build(log_dir)
        .context("failed to create log file appender")?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER).context("invalid default log filter")?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
