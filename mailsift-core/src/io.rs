//! Reading input text and writing extracted results.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SiftError};
use crate::report;

/// Read the whole file at `path` as UTF-8 text.
///
/// A missing file maps to [`SiftError::InputNotFound`]; permission problems,
/// directories and invalid UTF-8 map to [`SiftError::InputRead`].
pub fn read_text_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
            Ok(text)
        }
        Err(source) if source.kind() == ErrorKind::NotFound => Err(SiftError::InputNotFound {
            path: path.to_path_buf(),
            source,
        }),
        Err(source) => Err(SiftError::InputRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `emails` to `path`, sorted, one per line, UTF-8.
///
/// The file is created or truncated. Missing parent directories are an error.
pub fn write_emails(path: &Path, emails: &HashSet<String>) -> Result<()> {
    let body = report::render(emails);
    fs::write(path, body.as_bytes()).map_err(|source| SiftError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), entries = emails.len(), "wrote output");
    Ok(())
}
