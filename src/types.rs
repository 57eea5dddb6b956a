use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::validator::is_valid;

/// Rule list dialect
///
/// Selects which prefix/wildcard conventions the rule adapter applies to each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleDialect {
    /// Adblock host anchors only: `||example.com^`
    PlainAdblock,
    /// Clash forms plus Adblock noise (`|`, `^`, `$options`, `@@` exceptions)
    ClashExtended,
    /// Clash/YAML forms: `DOMAIN,`, `DOMAIN-SUFFIX,`, `+.`, `*.`, `.`, bare domains
    #[default]
    ClashBasic,
}

impl RuleDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleDialect::PlainAdblock => "plain-adblock",
            RuleDialect::ClashExtended => "clash-extended",
            RuleDialect::ClashBasic => "clash-basic",
        }
    }
}

impl fmt::Display for RuleDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleDialect {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain-adblock" | "adblock" => Ok(RuleDialect::PlainAdblock),
            "clash-extended" => Ok(RuleDialect::ClashExtended),
            "clash-basic" | "clash" => Ok(RuleDialect::ClashBasic),
            other => Err(NormalizeError::Config(format!(
                "Unknown dialect: {} (expected plain-adblock, clash-extended or clash-basic)",
                other
            ))),
        }
    }
}

/// Output ordering policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Plain string order of the full domain
    #[default]
    Lexicographic,
    /// Group by registrable parent (last two labels), then string order within the group
    ParentGrouped,
}

impl SortPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortPolicy::Lexicographic => "lexicographic",
            SortPolicy::ParentGrouped => "parent-grouped",
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortPolicy {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicographic" | "lex" => Ok(SortPolicy::Lexicographic),
            "parent-grouped" | "parent" => Ok(SortPolicy::ParentGrouped),
            other => Err(NormalizeError::Config(format!(
                "Unknown sort policy: {} (expected lexicographic or parent-grouped)",
                other
            ))),
        }
    }
}

/// A validated, lowercased domain name.
///
/// Never empty and never carries rule syntax markers (`|`, `*`, `+`, quotes).
/// The bare-suffix form `.xx` is stored without its leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domain(String);

impl Domain {
    /// Validate and normalize a raw domain string.
    pub fn parse(raw: &str) -> Option<Self> {
        if !is_valid(raw) {
            return None;
        }
        let raw = raw.strip_prefix('.').unwrap_or(raw);
        Some(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels from leaf to top-level: `a.b.com` yields `a`, `b`, `com`.
    pub fn labels(&self) -> std::str::Split<'_, char> {
        self.0.split('.')
    }

    /// True when `self` is `<prefix>.<other>` for a non-empty prefix.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        let (name, parent) = (self.0.as_str(), other.0.as_str());
        name.len() > parent.len()
            && name.ends_with(parent)
            && name.as_bytes()[name.len() - parent.len() - 1] == b'.'
    }

    /// Registrable parent, approximated as the last two labels.
    pub fn parent(&self) -> &str {
        match self.0.rmatch_indices('.').nth(1) {
            Some((pos, _)) => &self.0[pos + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique domains accumulated during one run
pub type DomainSet = HashSet<Domain>;

/// Final ordered output
pub type OutputList = Vec<Domain>;

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Domain {
        Domain::parse(s).unwrap()
    }

    #[test]
    fn test_parse_lowercases() {
        assert_eq!(d("WWW.Example.COM").as_str(), "www.example.com");
    }

    #[test]
    fn test_parse_strips_suffix_dot() {
        assert_eq!(d(".jp").as_str(), "jp");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(Domain::parse("").is_none());
        assert!(Domain::parse("||example.com").is_none());
        assert!(Domain::parse("*.example.com").is_none());
        assert!(Domain::parse("localhost").is_none());
    }

    #[test]
    fn test_is_subdomain_of() {
        assert!(d("a.example.com").is_subdomain_of(&d("example.com")));
        assert!(d("a.b.example.com").is_subdomain_of(&d("example.com")));
        assert!(!d("example.com").is_subdomain_of(&d("example.com")));
        assert!(!d("notexample.com").is_subdomain_of(&d("example.com")));
        assert!(!d("example.com").is_subdomain_of(&d("a.example.com")));
    }

    #[test]
    fn test_parent() {
        assert_eq!(d("a.b.example.com").parent(), "example.com");
        assert_eq!(d("example.com").parent(), "example.com");
        assert_eq!(d(".jp").parent(), "jp");
    }

    #[test]
    fn test_labels_order() {
        let binding = d("a.b.com");
        let labels: Vec<&str> = binding.labels().collect();
        assert_eq!(labels, vec!["a", "b", "com"]);
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!(
            "plain-adblock".parse::<RuleDialect>().unwrap(),
            RuleDialect::PlainAdblock
        );
        assert_eq!(
            "Clash-Extended".parse::<RuleDialect>().unwrap(),
            RuleDialect::ClashExtended
        );
        assert_eq!("clash".parse::<RuleDialect>().unwrap(), RuleDialect::ClashBasic);
        assert!("surge".parse::<RuleDialect>().is_err());
    }

    #[test]
    fn test_sort_policy_from_str() {
        assert_eq!(
            "parent-grouped".parse::<SortPolicy>().unwrap(),
            SortPolicy::ParentGrouped
        );
        assert_eq!(
            "lexicographic".parse::<SortPolicy>().unwrap(),
            SortPolicy::Lexicographic
        );
        assert!("random".parse::<SortPolicy>().is_err());
    }

    #[test]
    fn test_dialect_serde_kebab_case() {
        let dialect: RuleDialect = serde_json::from_str("\"clash-extended\"").unwrap();
        assert_eq!(dialect, RuleDialect::ClashExtended);
        assert_eq!(
            serde_json::to_string(&RuleDialect::PlainAdblock).unwrap(),
            "\"plain-adblock\""
        );
    }
}
