//! Output formatting for the run summary.
//!
//! The summary is what `--show-count` prints to stdout. Text is the stable,
//! human-readable line; JSON is a single-line object for scripts.

use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// Output format for the summary line
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Extracted <N> unique email(s). Output: <path>` (default)
    #[default]
    Text,
    /// `{"count": N, "output": "<path>"}`
    Json,
}

/// Result of one extraction run.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub count: usize,
    pub output: PathBuf,
}

impl Summary {
    pub fn new(count: usize, output: PathBuf) -> Self {
        Self { count, output }
    }

    fn to_text(&self) -> String {
        format!(
            "Extracted {} unique email(s). Output: {}",
            self.count,
            self.output.display()
        )
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Render using the requested format.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => self.to_json(),
        }
    }
}
