//! mailsift core - email address extraction engine.
//!
//! This crate provides the matching and file plumbing behind the `mailsift`
//! command-line tool.
//!
//! # Features
//!
//! - **Extraction**: find every email-like substring in a text blob
//! - **Deduplication**: exact-match set semantics, no normalization
//! - **Reporting**: ordinal sort and newline-joined rendering
//! - **File I/O**: typed errors naming the offending path
//!
//! # Usage
//!
//! ```
//! use mailsift_core::{extract, report};
//!
//! let emails = extract("Contact: alice@example.com or BOB@Test.co.uk!");
//! assert_eq!(report::render(&emails), "BOB@Test.co.uk\nalice@example.com");
//! ```

pub mod error;
pub mod extractor;
pub mod io;
pub mod report;

pub use error::{Result, SiftError};
pub use extractor::{extract, is_email};
pub use io::{read_text_file, write_emails};
