//! Tracing library adapter implementation.

use crate::format::sprintf;
use crate::Logger;
use std::fmt::Display;
use tracing::Level;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Each call is rendered with [`sprintf`] and emitted as a single event with
/// target `tlog` at the configured level (`INFO` unless set otherwise). This
/// lets hosts plug a [`Logger`] consumer into their existing subscribers.
///
/// # Example
///
/// ```
/// use tlog::{printf, SharedLogger, TracingLogger};
/// use std::sync::Arc;
/// use tracing::Level;
///
/// // Assumes a tracing subscriber is already installed
/// let logger: SharedLogger = Arc::new(TracingLogger::with_level(Level::WARN));
/// printf!(logger, "using %s backend", "tracing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingLogger {
    level: Level,
}

impl TracingLogger {
    /// Create a tracing logger emitting at `INFO`.
    pub fn new() -> Self {
        Self::with_level(Level::INFO)
    }

    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        let message = sprintf(format, args);
        match self.level {
            Level::ERROR => tracing::error!(target: "tlog", "{}", message),
            Level::WARN => tracing::warn!(target: "tlog", "{}", message),
            Level::INFO => tracing::info!(target: "tlog", "{}", message),
            Level::DEBUG => tracing::debug!(target: "tlog", "{}", message),
            _ => tracing::trace!(target: "tlog", "{}", message),
        }
    }
}
