//! Ordering and serialization of an extracted email set.

use std::collections::HashSet;

/// Sort the set in ascending ordinal order.
///
/// `str` ordering compares UTF-8 bytes, which for valid strings is the same
/// as comparing code points.
pub fn sorted(emails: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = emails.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Render the set as the output file body.
///
/// One entry per line, joined by `\n` with no trailing newline. An empty set
/// renders as an empty string.
pub fn render(emails: &HashSet<String>) -> String {
    sorted(emails).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorted_is_ordinal() {
        let emails = set(&["b@x.io", "B@x.io", "a@x.io", "_@x.io"]);
        assert_eq!(sorted(&emails), vec!["B@x.io", "_@x.io", "a@x.io", "b@x.io"]);
    }

    #[test]
    fn test_render_no_trailing_newline() {
        let emails = set(&["alice@example.com", "BOB@Test.co.uk"]);
        assert_eq!(render(&emails), "BOB@Test.co.uk\nalice@example.com");
    }

    #[test]
    fn test_render_single_and_empty() {
        assert_eq!(render(&set(&["a@b.co"])), "a@b.co");
        assert_eq!(render(&HashSet::new()), "");
    }
}
