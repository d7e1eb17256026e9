//! Error types for the subscriber bootstrap path.
//!
//! The facade operations themselves are infallible; only preparing log
//! output (directories, files, the global `tracing` subscriber) can fail.

use thiserror::Error;

/// Errors raised while bootstrapping log output.
#[derive(Debug, Error)]
pub enum Error {
    /// The log directory could not be created or the log file prepared.
    #[error("failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global tracing subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}
