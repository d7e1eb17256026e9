//! Process-wide logging context.
//!
//! All state lives in [`LogContext`]; this module merely owns one static
//! instance of it and mirrors its operations as free functions, for code
//! that wants the ambient access point instead of threading a context
//! through constructors.

use crate::backend::Backend;
use crate::context::LogContext;
use crate::log::Logger;
use std::sync::Arc;

/// The process-wide context behind the free functions below.
static CONTEXT: LogContext = LogContext::new();

/// The process-wide [`LogContext`] itself.
///
/// Prefer injecting this (or a context of your own) into components over
/// calling the ambient functions from deep inside a codebase.
pub fn context() -> &'static LogContext {
    &CONTEXT
}

/// The active process-wide backend, lazily installing the default.
pub fn current_backend() -> Arc<dyn Backend> {
    CONTEXT.current_backend()
}

/// Look up a process-wide logger named after the type `T`.
pub fn get<T: ?Sized>() -> Arc<dyn Logger> {
    CONTEXT.get::<T>()
}

/// Look up a process-wide logger by name.
pub fn get_named(name: &str) -> Arc<dyn Logger> {
    CONTEXT.get_named(name)
}

/// Install `backend` as the process-wide backend, shutting down any prior one.
pub fn use_backend(backend: Arc<dyn Backend>) {
    CONTEXT.use_backend(backend);
}

/// Shut down and clear the process-wide backend, if any.
pub fn shutdown() {
    CONTEXT.shutdown();
}
