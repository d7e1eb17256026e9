//! The logging context: a lock-guarded, swappable backend slot.

use crate::backend::{Backend, TraceBackend};
use crate::log::Logger;
use crate::typename::clean_type_name;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Access point mediating every lookup against one interchangeable backend.
///
/// The context owns the only piece of state in this crate: a slot holding
/// the currently installed [`Backend`], guarded by a single mutex. The slot
/// starts empty; the first lookup installs a [`TraceBackend`] unless a
/// backend was installed explicitly with [`use_backend`](Self::use_backend).
///
/// Components should receive a `&LogContext` (or clone handles out of one)
/// rather than reach for ambient state; [`crate::global`] provides one
/// process-wide instance for code that wants the ambient form anyway.
///
/// # Locking
///
/// Every operation is a single guarded read-modify-write, and the backend's
/// own `get`/`shutdown` run while the lock is held. That totally orders
/// install, shutdown, and lookup across threads, at the cost that a slow
/// backend serializes all facade callers for its duration. The lock is not
/// reentrant - a backend must not call back into the context from `get` or
/// `shutdown`.
///
/// # Example
///
/// ```
/// use loghub::{LogContext, Logger};
///
/// struct Fetcher;
///
/// let context = LogContext::new();
/// let logger = context.get::<Fetcher>();
/// assert!(logger.name().ends_with("Fetcher"));
/// ```
#[derive(Default)]
pub struct LogContext {
    backend: Mutex<Option<Arc<dyn Backend>>>,
}

impl LogContext {
    /// Create a context with an empty backend slot.
    pub const fn new() -> Self {
        Self {
            backend: Mutex::new(None),
        }
    }

    /// The active backend, lazily installing the default.
    ///
    /// If the slot is empty a [`TraceBackend`] is constructed and installed
    /// before returning, so two concurrent first lookups still agree on a
    /// single instance. Cannot fail.
    pub fn current_backend(&self) -> Arc<dyn Backend> {
        let mut slot = self.lock_slot();
        resolve(&mut slot)
    }

    /// Look up a logger named after the type `T`.
    ///
    /// The name is derived with
    /// [`clean_type_name`](crate::typename::clean_type_name) and the lookup
    /// funnels through [`get_named`](Self::get_named).
    pub fn get<T: ?Sized>(&self) -> Arc<dyn Logger> {
        self.get_named(&clean_type_name::<T>())
    }

    /// Look up a logger by name from the active backend.
    ///
    /// Lazy default installation and the backend's `get` both happen under
    /// the lock, so a lookup never observes an absent backend.
    pub fn get_named(&self, name: &str) -> Arc<dyn Logger> {
        let mut slot = self.lock_slot();
        let backend = resolve(&mut slot);
        backend.get(name)
    }

    /// Install `backend` as the new active backend.
    ///
    /// Any previously installed backend is taken out of the slot and shut
    /// down first - the slot is already empty while that shutdown runs, so
    /// no caller can observe a half-replaced state once the lock is
    /// released.
    pub fn use_backend(&self, backend: Arc<dyn Backend>) {
        let mut slot = self.lock_slot();
        if let Some(old) = slot.take() {
            old.shutdown();
        }
        *slot = Some(backend);
    }

    /// Shut down and clear the active backend, if any.
    ///
    /// With an empty slot this is a no-op. The next lookup after a shutdown
    /// lazily installs a fresh default backend.
    pub fn shutdown(&self) {
        let mut slot = self.lock_slot();
        if let Some(backend) = slot.take() {
            backend.shutdown();
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Arc<dyn Backend>>> {
        // A panicking custom backend must not wedge the facade for the rest
        // of the process; recover the guard and keep going.
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn resolve(slot: &mut Option<Arc<dyn Backend>>) -> Arc<dyn Backend> {
    match slot {
        Some(backend) => Arc::clone(backend),
        None => {
            let backend: Arc<dyn Backend> = Arc::new(TraceBackend::new());
            *slot = Some(Arc::clone(&backend));
            backend
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogLevel;
    use std::fmt::Arguments;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubLogger {
        name: String,
    }

    impl Logger for StubLogger {
        fn name(&self) -> &str {
            &self.name
        }

        fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
    }

    /// Records requested names and counts shutdowns.
    #[derive(Default)]
    struct RecordingBackend {
        requested: Mutex<Vec<String>>,
        shutdowns: AtomicUsize,
    }

    impl RecordingBackend {
        fn shutdown_count(&self) -> usize {
            self.shutdowns.load(Ordering::SeqCst)
        }
    }

    impl Backend for RecordingBackend {
        fn get(&self, name: &str) -> Arc<dyn Logger> {
            self.requested.lock().unwrap().push(name.to_string());
            Arc::new(StubLogger {
                name: name.to_string(),
            })
        }

        fn shutdown(&self) {
            self.shutdowns.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_lazy_default_is_installed_once() {
        let context = LogContext::new();
        let first = context.current_backend();
        let second = context.current_backend();
        assert!(
            Arc::ptr_eq(&first, &second),
            "repeated lookups should return the same default backend"
        );
    }

    #[test]
    fn test_get_named_routes_to_installed_backend() {
        let context = LogContext::new();
        let backend = Arc::new(RecordingBackend::default());
        context.use_backend(backend.clone());

        let logger = context.get_named("app.pipeline");

        assert_eq!(logger.name(), "app.pipeline");
        assert_eq!(
            backend.requested.lock().unwrap().as_slice(),
            &["app.pipeline".to_string()]
        );
    }

    #[test]
    fn test_get_derives_name_from_type() {
        struct Sample;

        let context = LogContext::new();
        let backend = Arc::new(RecordingBackend::default());
        context.use_backend(backend.clone());

        let logger = context.get::<Sample>();

        let expected = "loghub.context.tests.test_get_derives_name_from_type.Sample";
        assert_eq!(logger.name(), expected);
        assert_eq!(
            backend.requested.lock().unwrap().as_slice(),
            &[expected.to_string()]
        );
    }

    #[test]
    fn test_replacement_shuts_down_prior_backend_once() {
        let context = LogContext::new();
        let first = Arc::new(RecordingBackend::default());
        let second = Arc::new(RecordingBackend::default());

        context.use_backend(first.clone());
        context.use_backend(second.clone());

        assert_eq!(first.shutdown_count(), 1, "displaced backend shuts down once");
        assert_eq!(second.shutdown_count(), 0);

        context.get_named("app.after");
        assert!(first.requested.lock().unwrap().is_empty());
        assert_eq!(
            second.requested.lock().unwrap().as_slice(),
            &["app.after".to_string()]
        );
    }

    #[test]
    fn test_replacing_the_default_shuts_it_down() {
        let context = LogContext::new();
        let default = context.current_backend();
        let replacement = Arc::new(RecordingBackend::default());

        context.use_backend(replacement.clone());

        let active = context.current_backend();
        assert!(!Arc::ptr_eq(&default, &active));
    }

    #[test]
    fn test_shutdown_clears_slot_and_next_lookup_reinstalls() {
        let context = LogContext::new();
        let before = context.current_backend();

        context.shutdown();
        let after = context.current_backend();

        assert!(
            !Arc::ptr_eq(&before, &after),
            "lookup after shutdown should build a fresh default"
        );
    }

    #[test]
    fn test_shutdown_on_empty_slot_is_a_no_op() {
        let context = LogContext::new();
        context.shutdown();
        context.shutdown();
    }

    #[test]
    fn test_shutdown_reaches_installed_backend_exactly_once() {
        let context = LogContext::new();
        let backend = Arc::new(RecordingBackend::default());
        context.use_backend(backend.clone());

        context.shutdown();
        context.shutdown();

        assert_eq!(backend.shutdown_count(), 1);
    }

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogContext>();
    }
}
