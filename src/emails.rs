//! Email address discovery in extracted text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Whole-token email pattern: local part, `@`, domain, dot, alphabetic TLD.
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Scan a text blob for email addresses.
///
/// Matches are bounded by word boundaries on both ends, so an address buried
/// inside a larger token is never extracted as that address. Results are
/// deduplicated and sorted lexicographically for stable output across runs.
/// Never fails; empty input yields an empty vec.
pub fn find_emails(text: &str) -> Vec<String> {
    let unique: BTreeSet<String> = email_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_and_dedupes() {
        let emails = find_emails("a@b.com, a@b.com, c@d.org");
        assert_eq!(emails, vec!["a@b.com", "c@d.org"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let emails = find_emails("zeta@example.com then alpha@example.com");
        assert_eq!(emails, vec!["alpha@example.com", "zeta@example.com"]);
    }

    #[test]
    fn test_embedded_address_is_not_extracted() {
        // The address inside the larger token must never surface on its own.
        let emails = find_emails("xxa@b.comxx");
        assert!(!emails.contains(&"a@b.com".to_string()));
    }

    #[test]
    fn test_word_boundary_rejects_trailing_word_char() {
        assert!(find_emails("a@b.com_tail").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_emails("").is_empty());
    }

    #[test]
    fn test_finds_address_in_prose() {
        let text = "Contact us at support@example.co.uk for help.\n";
        assert_eq!(find_emails(text), vec!["support@example.co.uk"]);
    }

    #[test]
    fn test_rejects_token_without_tld() {
        assert!(find_emails("user@localhost").is_empty());
    }
}
