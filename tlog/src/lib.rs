//! tlog - a tiny logging interface.
//!
//! This crate defines the smallest useful logging contract: a single
//! printf-style operation. Library code depends on the contract and lets the
//! host application decide where log lines go, if anywhere.
//!
//! # Architecture
//!
//! - `Logger` trait: the one-method interface all components log through
//! - `NoOpLogger`: stateless logger that discards everything, used as a default
//! - `WriterLogger`: writes rendered lines to any `io::Write`
//! - `TracingLogger`: forwards rendered lines to the `tracing` crate
//! - `CaptureLogger`: records calls in memory for assertions in tests
//!
//! # Usage
//!
//! Components accept an optional logger and fall back to the no-op logger, so
//! call sites never check for a missing logger:
//!
//! ```
//! use tlog::{printf, or_noop, SharedLogger};
//!
//! struct MyComponent {
//!     log: SharedLogger,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Option<SharedLogger>) -> Self {
//!         Self { log: or_noop(logger) }
//!     }
//!
//!     fn do_work(&self) {
//!         printf!(self.log, "starting %s", "work");
//!     }
//! }
//!
//! MyComponent::new(None).do_work();
//! ```
//!
//! A logger is anything implementing [`Logger`]. Implementations choose how the
//! format string is interpreted and never report errors back to the caller.

mod capture;
mod error;
pub mod format;
mod noop;
mod tracing_adapter;
mod r#trait;
mod writer;

pub use capture::{CaptureLogger, Record};
pub use error::LogError;
pub use noop::{noop, or_noop, shared_noop, NoOpLogger, NOOP_LOGGER};
pub use r#trait::{Logger, SharedLogger};
pub use tracing_adapter::TracingLogger;
pub use writer::{WriterConfig, WriterLogger};

/// Version of the tlog library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
