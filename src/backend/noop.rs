//! No-operation backend implementation.

use crate::backend::Backend;
use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::Arc;

/// A backend whose handles discard all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use loghub::backend::{Backend, NoOpBackend};
/// use loghub::log::Logger;
///
/// let logger = NoOpBackend.get("app.quiet");
/// logger.info(format_args!("this message is discarded"));
/// assert_eq!(logger.name(), "app.quiet");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl Backend for NoOpBackend {
    fn get(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(NoOpLogger {
            name: name.to_string(),
        })
    }

    fn shutdown(&self) {
        // Intentionally empty - there is nothing to release
    }
}

/// Handle produced by [`NoOpBackend`].
#[derive(Debug)]
struct NoOpLogger {
    name: String,
}

impl Logger for NoOpLogger {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {
        // Intentionally empty - discard all log messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpBackend>();
    }

    #[test]
    fn test_handle_keeps_name() {
        let logger = NoOpBackend.get("app.silent");
        assert_eq!(logger.name(), "app.silent");
    }

    #[test]
    fn test_handle_accepts_every_level() {
        let logger = NoOpBackend.get("app.silent");
        logger.trace(format_args!("trace message"));
        logger.debug(format_args!("debug message"));
        logger.info(format_args!("info message"));
        logger.warn(format_args!("warn message"));
        logger.error(format_args!("error message"));
    }

    #[test]
    fn test_shutdown_is_a_no_op() {
        let backend = NoOpBackend;
        backend.shutdown();
        backend.shutdown();
    }

    #[test]
    fn test_backend_as_trait_object() {
        let backend: Arc<dyn Backend> = Arc::new(NoOpBackend);
        let logger = backend.get("app.obj");
        assert_eq!(logger.name(), "app.obj");
    }
}
