//! Logger writing rendered lines to an `io::Write`.

use crate::error::LogError;
use crate::format::sprintf;
use crate::Logger;
use parking_lot::Mutex;
use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Timestamp layout used when timestamps are enabled.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Line layout for [`WriterLogger`].
///
/// # Example
///
/// ```
/// use tlog::WriterConfig;
///
/// let config = WriterConfig::new()
///     .with_prefix("[worker] ")
///     .with_timestamps(true);
/// assert_eq!(config.prefix(), "[worker] ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    prefix: String,
    timestamps: bool,
    newline: bool,
}

impl WriterConfig {
    /// Create the default configuration: no prefix, no timestamps, newline on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written at the start of every line, after the timestamp.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Start every line with the local time.
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Terminate lines that do not already end in `\n`.
    pub fn with_newline(mut self, enabled: bool) -> Self {
        self.newline = enabled;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    pub fn newline(&self) -> bool {
        self.newline
    }

    fn render_line(&self, format: &str, args: &[&dyn Display]) -> String {
        let mut line = String::new();
        if self.timestamps {
            line.push_str(&chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
            line.push(' ');
        }
        line.push_str(&self.prefix);
        line.push_str(&sprintf(format, args));
        if self.newline && !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            timestamps: false,
            newline: true,
        }
    }
}

/// Logger that renders each call and writes it to `W`.
///
/// Writes are serialized through a mutex and flushed after every line. A
/// failed write drops the line; the failure is reported as a `tracing` debug
/// event and never reaches the caller.
///
/// # Example
///
/// ```
/// use tlog::{printf, WriterLogger};
///
/// let logger = WriterLogger::new(Vec::new());
/// printf!(logger, "hello from my %s logger", "buffer");
/// assert_eq!(logger.into_inner(), b"hello from my buffer logger\n");
/// ```
#[derive(Debug)]
pub struct WriterLogger<W: Write> {
    writer: Mutex<W>,
    config: WriterConfig,
}

impl<W: Write> WriterLogger<W> {
    /// Create a logger with the default [`WriterConfig`].
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self {
            writer: Mutex::new(writer),
            config,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Consume the logger and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterLogger<io::Stderr> {
    /// Create a logger writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterLogger<File> {
    /// Open `path` for appending, creating the file and its parent directories
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] if the directory cannot be created or the file
    /// cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        Self::open_with_config(path, WriterConfig::default())
    }

    /// Like [`open`](Self::open) with an explicit configuration.
    pub fn open_with_config(
        path: impl AsRef<Path>,
        config: WriterConfig,
    ) -> Result<Self, LogError> {
        let path = path.as_ref();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::with_config(file, config))
    }
}

impl<W: Write> Logger for WriterLogger<W> {
    fn printf(&self, format: &str, args: &[&dyn Display]) {
        let line = self.config.render_line(format, args);
        let mut writer = self.writer.lock();
        let result = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush());
        if let Err(e) = result {
            tracing::debug!(error = %e, "Dropped log line after write failure");
        }
    }
}
