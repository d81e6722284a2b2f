//! mailsift configuration loading from an optional TOML file.
//!
//! Configuration is opt-in: nothing is read unless `--config <path>` is passed.
//! Values from the file sit between command-line flags and built-in defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [extract]
//! input = "data/input.txt"
//! output = "out/emails.txt"
//! show_count = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default input path when neither flag nor config provides one.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default output path when neither flag nor config provides one.
pub const DEFAULT_OUTPUT: &str = "emails_output.txt";

/// Root configuration structure.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SiftConfig {
    /// Defaults for a single extraction run.
    #[serde(default)]
    pub extract: ExtractSection,
}

/// `[extract]` section.
///
/// Every key is optional; an absent key falls through to the built-in default.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ExtractSection {
    /// Input text file.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Destination for the extracted list.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Print the summary line after writing.
    #[serde(default)]
    pub show_count: Option<bool>,
}

impl SiftConfig {
    /// Load configuration from `path`.
    ///
    /// Unlike an implicit project config, an explicitly requested file that is
    /// missing or malformed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub show_count: bool,
}

impl RunSettings {
    /// Merge command-line values over config values over defaults.
    ///
    /// `show_count` is a plain flag on the command line, so it can only turn
    /// the summary on; a config value of `true` is honoured when the flag is
    /// absent.
    pub fn resolve(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        show_count: bool,
        config: &SiftConfig,
    ) -> Self {
        let section = &config.extract;
        Self {
            input: input
                .or_else(|| section.input.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: output
                .or_else(|| section.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            show_count: show_count || section.show_count.unwrap_or(false),
        }
    }
}
