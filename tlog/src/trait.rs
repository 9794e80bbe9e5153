//! Logger trait definition.

use std::fmt::Display;
use std::sync::Arc;

/// Logging interface for application components.
///
/// A logger has a single operation, [`printf`](Logger::printf), taking a
/// format string and an ordered list of type-erased arguments. How the format
/// string is interpreted is up to the implementation.
///
/// # Errors
///
/// `printf` returns nothing. An implementation that fails to write must deal
/// with the failure itself (usually by dropping the line), so logging can never
/// disturb the caller's control flow.
///
/// # Thread Safety
///
/// The trait does not require `Send + Sync`. Use [`SharedLogger`] when a
/// logger has to be shared across threads.
///
/// # Example
///
/// ```
/// use tlog::{printf, Logger, NoOpLogger};
///
/// let logger = NoOpLogger;
/// logger.printf("hello %s", &[&"world"]);
/// printf!(logger, "%d items in %s", 3, "queue");
/// ```
pub trait Logger {
    /// Log a formatted message.
    fn printf(&self, format: &str, args: &[&dyn Display]);
}

/// A logger that can be shared between threads.
pub type SharedLogger = Arc<dyn Logger + Send + Sync>;

impl<L: Logger + ?Sized> Logger for &L {
    #[inline]
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        (**self).printf(format, args);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[inline]
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        (**self).printf(format, args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[inline]
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        (**self).printf(format, args);
    }
}

/// An unset logger discards messages, like [`NoOpLogger`](crate::NoOpLogger).
impl<L: Logger> Logger for Option<L> {
    #[inline]
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        if let Some(logger) = self {
            logger.printf(format, args);
        }
    }
}

/// Log through any [`Logger`] with arbitrary `Display` arguments.
///
/// ```
/// use tlog::{printf, CaptureLogger};
///
/// let logger = CaptureLogger::new();
/// printf!(logger, "user %s logged in after %d attempts", "ana", 2);
/// assert_eq!(logger.messages(), vec!["user ana logged in after 2 attempts"]);
/// ```
#[macro_export]
macro_rules! printf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::Logger::printf(
            &$logger,
            $format,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}
