//! No-operation logger implementation.

use crate::{Logger, SharedLogger};
use once_cell::sync::Lazy;
use std::fmt::Display;
use std::sync::Arc;

/// A logger that discards all messages.
///
/// Useful for:
/// - A default when the host has not configured a logger
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
///
/// # Example
///
/// ```
/// use tlog::{printf, NoOpLogger, SharedLogger};
/// use std::sync::Arc;
///
/// let logger: SharedLogger = Arc::new(NoOpLogger);
/// printf!(logger, "This message is %s", "discarded");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn printf(&self, _format: &str, _args: &[&dyn Display]) {}
}

/// The process-wide no-op logger.
pub static NOOP_LOGGER: NoOpLogger = NoOpLogger;

static SHARED_NOOP: Lazy<SharedLogger> = Lazy::new(|| Arc::new(NoOpLogger));

/// Returns the process-wide no-op logger.
#[inline]
pub fn noop() -> &'static NoOpLogger {
    &NOOP_LOGGER
}

/// Returns the process-wide no-op logger as a [`SharedLogger`].
///
/// The `Arc` is created on first use; every call hands out a clone of it.
pub fn shared_noop() -> SharedLogger {
    Arc::clone(&SHARED_NOOP)
}

/// Returns `logger`, or the shared no-op logger when it is `None`.
///
/// ```
/// use tlog::{or_noop, printf, SharedLogger};
///
/// struct Worker {
///     log: SharedLogger,
/// }
///
/// impl Worker {
///     fn set_logger(&mut self, logger: Option<SharedLogger>) {
///         self.log = or_noop(logger);
///     }
/// }
///
/// let mut worker = Worker { log: or_noop(None) };
/// worker.set_logger(None);
/// printf!(worker.log, "still safe to call");
/// ```
pub fn or_noop(logger: Option<SharedLogger>) -> SharedLogger {
    logger.unwrap_or_else(shared_noop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureLogger;

    #[test]
    fn test_noop_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpLogger>();
    }

    #[test]
    fn test_noop_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(NoOpLogger);
        logger.printf("hello %s", &[&"world"]);
        logger.printf("", &[]);
        logger.printf("%d %d %d", &[&1, &2]);
        logger.printf("no verbs", &[&"extra", &3.5]);
    }

    #[test]
    fn test_noop_logger_debug_impl() {
        assert_eq!(format!("{:?}", NoOpLogger), "NoOpLogger");
    }

    #[test]
    fn test_noop_returns_static_instance() {
        assert!(std::ptr::eq(noop(), &NOOP_LOGGER));
        crate::printf!(noop(), "static %s", "instance");
    }

    #[test]
    fn test_shared_noop_is_single_instance() {
        let a = shared_noop();
        let b = shared_noop();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_or_noop_keeps_given_logger() {
        let capture = Arc::new(CaptureLogger::new());
        let logger = or_noop(Some(capture.clone()));
        crate::printf!(logger, "kept");
        assert_eq!(capture.len(), 1);
    }

    #[test]
    fn test_or_noop_falls_back() {
        let logger = or_noop(None);
        assert!(Arc::ptr_eq(&logger, &shared_noop()));
        crate::printf!(logger, "dropped %d", 1);
    }
}
