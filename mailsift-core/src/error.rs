//! Error types for mailsift-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mailsift-core file operations.
pub type Result<T> = std::result::Result<T, SiftError>;

/// Errors raised while moving text in and out of the extractor.
///
/// Extraction itself is infallible; every variant here is a file-level
/// failure and carries the path it happened on.
#[derive(Error, Debug)]
pub enum SiftError {
    /// The input file does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The input file exists but could not be read or is not valid UTF-8.
    #[error("Could not read file {}", path.display())]
    InputRead {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying OS or decoding error.
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("Could not write output file {}", path.display())]
    OutputWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },
}

impl SiftError {
    /// Path the failure is attached to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SiftError::InputNotFound { path, .. }
            | SiftError::InputRead { path, .. }
            | SiftError::OutputWrite { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = SiftError::InputNotFound {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "Input file not found: missing.txt");

        let err = SiftError::OutputWrite {
            path: PathBuf::from("/nope/out.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/nope/out.txt"));
    }

    #[test]
    fn test_error_keeps_os_cause() {
        let err = SiftError::InputRead {
            path: PathBuf::from("in.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        let cause = err.source().expect("source should be attached");
        assert!(cause.to_string().contains("valid UTF-8"));
        assert_eq!(err.path(), std::path::Path::new("in.txt"));
    }
}
