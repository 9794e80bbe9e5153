//! In-memory logger for tests.

use crate::format::sprintf;
use crate::Logger;
use parking_lot::Mutex;
use std::fmt::Display;

/// One captured `printf` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The format string as passed by the caller
    pub format: String,
    /// Each argument's `Display` form, in order
    pub args: Vec<String>,
}

impl Record {
    /// Render the record the way the bundled loggers would.
    pub fn message(&self) -> String {
        let args: Vec<&dyn Display> = self.args.iter().map(|a| a as &dyn Display).collect();
        sprintf(&self.format, &args)
    }
}

/// A logger that records every call in order.
///
/// # Example
///
/// ```
/// use tlog::{printf, CaptureLogger};
///
/// let logger = CaptureLogger::new();
/// printf!(logger, "first %d", 1);
/// printf!(logger, "second %d", 2);
///
/// let records = logger.records();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].format, "first %d");
/// assert_eq!(records[1].args, vec!["2"]);
/// ```
#[derive(Debug, Default)]
pub struct CaptureLogger {
    records: Mutex<Vec<Record>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured calls, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Captured calls rendered as messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(Record::message).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for CaptureLogger {
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        let record = Record {
            format: format.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        };
        self.records.lock().push(record);
    }
}
