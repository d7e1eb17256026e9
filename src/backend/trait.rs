//! Backend trait definition.

use crate::log::Logger;
use std::sync::Arc;

/// Capability interface for a pluggable logging backend.
///
/// Anything that can hand out named [`Logger`] handles and release its
/// resources on request may be installed into the facade, either explicitly
/// via [`crate::LogContext::use_backend`] or as the lazily constructed
/// default.
///
/// # Locking contract
///
/// The facade invokes both methods while holding its internal lock, so a
/// slow `get` or `shutdown` serializes every other facade caller for its
/// duration. The lock is not reentrant: an implementation must not call back
/// into facade operations from either method, or the calling thread
/// deadlocks against itself.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the active backend is shared
/// across every thread that touches the facade.
pub trait Backend: Send + Sync {
    /// Obtain a logger handle for the given name.
    fn get(&self, name: &str) -> Arc<dyn Logger>;

    /// Shut down the backend and release any resources it holds.
    ///
    /// Called exactly once when the backend is displaced by a replacement
    /// or cleared by an explicit shutdown.
    fn shutdown(&self);
}
