//! LogHub - a process-wide, swappable logging facade.
//!
//! This library provides a single access point that returns named logger
//! handles, defers all emission to a pluggable backend, and derives
//! human-readable logger names from type metadata.
//!
//! # High-Level API
//!
//! Most callers look up a handle through a [`LogContext`] (or the
//! process-wide one in [`global`]) and log through the `log_*!` macros:
//!
//! ```
//! use loghub::{LogContext, Logger};
//! use loghub::log_info;
//!
//! struct TileFetcher;
//!
//! let context = LogContext::new();
//! let logger = context.get::<TileFetcher>();
//! log_info!(logger, "fetch complete in {}ms", 12);
//! ```
//!
//! Swapping where the output goes is a matter of installing another
//! backend:
//!
//! ```
//! use loghub::{LogContext, NoOpBackend};
//! use std::sync::Arc;
//!
//! let context = LogContext::new();
//! context.use_backend(Arc::new(NoOpBackend));
//! context.shutdown(); // next lookup reinstalls the default
//! ```

pub mod backend;
pub mod context;
pub mod error;
pub mod global;
pub mod init;
pub mod log;
pub mod typename;

pub use backend::{Backend, NoOpBackend, TraceBackend};
pub use context::LogContext;
pub use error::Error;
pub use init::{init_console, init_file, InitGuard};
pub use log::{LogLevel, Logger};
pub use typename::{clean_type_name, TypeDescriptor};

/// Version of the LogHub library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
