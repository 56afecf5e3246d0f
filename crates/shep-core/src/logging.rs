//! Logging bootstrap.
//!
//! The TUI owns the terminal, so interactive runs log to a file under
//! `${SHEP_HOME}/logs` through a non-blocking appender. One-shot commands
//! log to stderr instead. `SHEP_LOG` overrides the filter in both cases.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

const FILE_FILTER: &str = "shep=info,shep_core=info,shep_tui=info";
const STDERR_FILTER: &str = "shep=warn,shep_core=warn,shep_tui=warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("SHEP_LOG").unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initializes file logging for the interactive TUI.
///
/// Keep the returned guard alive for the lifetime of the process; dropping
/// it flushes and stops the background writer.
pub fn init_file_logging() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create log directory {}", logs_dir.display()))?;
    let appender = tracing_appender::rolling::daily(&logs_dir, "shep.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(env_filter(FILE_FILTER))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Ok(guard)
}

/// Initializes stderr logging for one-shot commands.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter(STDERR_FILTER))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
