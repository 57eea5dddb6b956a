use once_cell::sync::Lazy;
use regex::Regex;

/// Full domain (`example.com`) or bare suffix (`.com`).
/// The final label must be alphabetic and at least two characters long.
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$|^\.[a-zA-Z]{2,}$")
        .expect("DOMAIN_PATTERN: hardcoded regex is invalid")
});

/// Check whether a raw string is a syntactically plausible domain or domain suffix.
pub fn is_valid(raw: &str) -> bool {
    DOMAIN_PATTERN.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_pattern_regex_compiles() {
        assert!(DOMAIN_PATTERN.is_match("example.com"));
    }

    #[test]
    fn test_valid_domains() {
        assert!(is_valid("example.com"));
        assert!(is_valid("www.example.com"));
        assert!(is_valid("a-b.c-d.example.co"));
        assert!(is_valid("0769.it"));
        assert!(is_valid("EXAMPLE.COM"));
    }

    #[test]
    fn test_valid_suffix() {
        assert!(is_valid(".jp"));
        assert!(is_valid(".com"));
    }

    #[test]
    fn test_rejects_empty_and_single_label() {
        assert!(!is_valid(""));
        assert!(!is_valid("localhost"));
        assert!(!is_valid("."));
        assert!(!is_valid(".j"));
    }

    #[test]
    fn test_rejects_numeric_tld() {
        // IP addresses and CIDRs end in a numeric label
        assert!(!is_valid("10.0.0.1"));
        assert!(!is_valid("10.0.0.0/8"));
        assert!(!is_valid("example.c0m"));
    }

    #[test]
    fn test_rejects_rule_markers() {
        assert!(!is_valid("||example.com"));
        assert!(!is_valid("*.example.com"));
        assert!(!is_valid("+.example.com"));
        assert!(!is_valid("example.com^"));
        assert!(!is_valid("'example.com'"));
        assert!(!is_valid("DOMAIN,example.com"));
    }

    #[test]
    fn test_rejects_malformed_labels() {
        assert!(!is_valid("example..com"));
        assert!(!is_valid("example.com."));
        assert!(!is_valid("exa mple.com"));
        assert!(!is_valid("example_site.com"));
    }
}
