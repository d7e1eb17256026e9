//! Default backend that emits through the `tracing` crate.

use crate::backend::Backend;
use crate::log::{LogLevel, Logger};
use std::collections::HashMap;
use std::fmt::Arguments;
use std::sync::{Arc, Mutex, PoisonError};

/// Backend that forwards every record to the `tracing` ecosystem.
///
/// This is the backend the facade constructs on first lookup when nothing
/// else has been installed. Each record becomes a `tracing` event at the
/// matching level, carrying the logger name as the `logger` field; whatever
/// subscriber the host application installed (see [`crate::init`]) decides
/// where the event ends up.
///
/// Handles are cached per name, so repeated lookups of the same name return
/// the same handle until [`Backend::shutdown`] drains the cache.
///
/// # Example
///
/// ```
/// use loghub::backend::{Backend, TraceBackend};
///
/// let backend = TraceBackend::new();
/// let a = backend.get("app.fetcher");
/// let b = backend.get("app.fetcher");
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct TraceBackend {
    handles: Mutex<HashMap<String, Arc<TraceLogger>>>,
}

impl TraceBackend {
    /// Create a new tracing-backed backend with an empty handle cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for TraceBackend {
    fn get(&self, name: &str) -> Arc<dyn Logger> {
        let mut handles = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let handle = handles
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(TraceLogger::new(name)));
        handle.clone()
    }

    fn shutdown(&self) {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Handle produced by [`TraceBackend`].
#[derive(Debug)]
struct TraceLogger {
    name: String,
}

impl TraceLogger {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Logger for TraceLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(logger = %self.name, "{}", args),
            LogLevel::Debug => tracing::debug!(logger = %self.name, "{}", args),
            LogLevel::Info => tracing::info!(logger = %self.name, "{}", args),
            LogLevel::Warn => tracing::warn!(logger = %self.name, "{}", args),
            LogLevel::Error => tracing::error!(logger = %self.name, "{}", args),
        }
    }
}
