//! Pluggable logging backends.
//!
//! A backend is the component the facade delegates to when a caller asks for
//! a named logger handle. Exactly one backend is active at a time; the
//! facade installs [`TraceBackend`] lazily when nothing else has been
//! supplied.
//!
//! # Architecture
//!
//! - [`Backend`] trait: the capability set a backend must provide
//!   (get-handle-by-name, shutdown)
//! - [`TraceBackend`]: default backend that emits through the `tracing` crate
//! - [`NoOpBackend`]: silent backend for testing and benchmarking

mod noop;
mod trace;
mod r#trait;

pub use noop::NoOpBackend;
pub use r#trait::Backend;
pub use trace::TraceBackend;
