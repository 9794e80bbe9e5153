//! Error types for logger construction.
//!
//! Logging itself never fails from the caller's point of view. These errors
//! are only returned while building a logger.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing a logger.
#[derive(Debug, Error)]
pub enum LogError {
    /// The directory holding the log file could not be created
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened for appending
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let err = LogError::Open {
            path: PathBuf::from("/var/log/app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to open log file /var/log/app.log: denied"
        );
    }

    #[test]
    fn test_error_source_is_io() {
        use std::error::Error as _;

        let err = LogError::CreateDir {
            path: PathBuf::from("logs"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        let source = err.source().expect("source should be set");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }
}
