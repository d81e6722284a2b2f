//! Email address extraction.
//!
//! A candidate is a local part, a literal `@`, and a dotted domain whose last
//! label is at least two ASCII letters. Matches are found left to right and
//! never overlap; no word boundaries are required around them.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, first domain label, optional subdomain labels, TLD.
macro_rules! email_pattern {
    () => {
        concat!(
            r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
            r"@",
            r"[a-zA-Z0-9-]+",
            r"(?:\.[a-zA-Z0-9-]+)*",
            r"\.[a-zA-Z]{2,}",
        )
    };
}

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(email_pattern!()).unwrap());
static EMAIL_ANCHORED: Lazy<Regex> =
    Lazy::new(|| Regex::new(concat!(r"^(?:", email_pattern!(), r")$")).unwrap());

/// Return the set of unique email addresses found in `text`.
///
/// Duplicates collapse under exact string equality; case and Unicode form
/// are preserved as found. The set carries no order, callers sort for output.
pub fn extract(text: &str) -> HashSet<String> {
    let emails: HashSet<String> = EMAIL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    tracing::debug!(
        input_bytes = text.len(),
        unique = emails.len(),
        "extracted email candidates"
    );

    emails
}

/// Check whether `candidate` as a whole matches the email grammar.
pub fn is_email(candidate: &str) -> bool {
    EMAIL_ANCHORED.is_match(candidate)
}
