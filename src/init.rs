//! Subscriber bootstrap for the default backend's output.
//!
//! The default [`TraceBackend`](crate::backend::TraceBackend) emits `tracing`
//! events; nothing is visible until the host application installs a
//! subscriber. These helpers set one up:
//! - [`init_console`] prints to stdout
//! - [`init_file`] writes to a log file (cleared on start) and stdout
//! - Both filter via the `RUST_LOG` environment variable, defaulting to
//!   `info`

use crate::error::Error;
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer, if one was
/// set up.
pub struct InitGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install a stdout subscriber for the default backend's events.
///
/// # Errors
///
/// Returns [`Error::Subscriber`] if a global subscriber is already
/// installed.
pub fn init_console() -> Result<InitGuard, Error> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| Error::Subscriber(e.to_string()))?;

    Ok(InitGuard { _file_guard: None })
}

/// Install a subscriber writing to both a log file and stdout.
///
/// Creates `log_dir` if needed and clears any previous `log_file` so each
/// session starts with a fresh log.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "loghub.log")
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created or the file
/// cannot be cleared, and [`Error::Subscriber`] if a global subscriber is
/// already installed.
pub fn init_file(log_dir: &str, log_file: &str) -> Result<InitGuard, Error> {
    fs::create_dir_all(log_dir)?;

    // Clear the previous log file by writing empty content; handles both
    // existing and non-existing files.
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false); // No ANSI colors in file

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| Error::Subscriber(e.to_string()))?;

    Ok(InitGuard {
        _file_guard: Some(file_guard),
    })
}
