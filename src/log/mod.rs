//! Logger handle surface.
//!
//! This module defines the interface through which application code emits log
//! entries: a named [`Logger`] handle obtained from the facade, a [`LogLevel`]
//! for severity, and `log_*!` convenience macros.
//!
//! # Architecture
//!
//! - `Logger` trait: the handle every lookup returns; where messages go is
//!   decided by whichever backend produced the handle
//! - `LogLevel`: ordered severity levels shared by all backends
//!
//! # Usage
//!
//! Components that need logging hold an `Arc<dyn Logger>` and use the
//! provided macros:
//!
//! ```
//! use loghub::log::Logger;
//! use loghub::log_info;
//! use std::sync::Arc;
//!
//! struct Downloader {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Downloader {
//!     fn new(logger: Arc<dyn Logger>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn fetch(&self) {
//!         log_info!(self.logger, "fetch started");
//!     }
//! }
//! ```

mod r#trait;

pub use r#trait::{LogLevel, Logger};
