//! Tracing setup: a daily rolling `krishi.log` file.
//!
//! Logs never go to stdout since the terminal belongs to the REPL.

use krishi_core::error::{KrishiError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `KRISHI_LOG=debug`.
pub const LOG_ENV: &str = "KRISHI_LOG";
const LOG_FILE: &str = "krishi.log";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `log_dir`.
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes and stops the writer thread.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| KrishiError::internal(format!("Failed to install tracing subscriber: {e}")))?;

    Ok(guard)
}
