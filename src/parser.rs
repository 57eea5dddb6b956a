use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::RuleDialect;

/// Regex pattern for Adblock host-anchor rules
/// Format: ||domain[^][$options]
static ADBLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|\|([a-zA-Z0-9.-]+)")
        .expect("ADBLOCK_PATTERN: hardcoded regex is invalid")
});

/// Line prefixes that never carry a domain in Clash/YAML lists.
const SKIP_PREFIXES: &[&str] = &[
    "payload:", "rules:", "#", "!", "/", "【", "】", "[", "]",
];

/// Additional prefixes skipped in mixed ad lists.
const EXTENDED_SKIP_PREFIXES: &[&str] = &["regexp", "@"];

/// Rule kind named before the first comma of a Clash rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `DOMAIN,example.com`
    Domain,
    /// `DOMAIN-SUFFIX,example.com`
    DomainSuffix,
    /// IP-CIDR, IP-CIDR6, IP-SUFFIX, DOMAIN-KEYWORD, PROCESS-NAME, GEOIP, GEOSITE, ...
    Unsupported,
}

impl RuleKind {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_uppercase().as_str() {
            "DOMAIN" => RuleKind::Domain,
            "DOMAIN-SUFFIX" => RuleKind::DomainSuffix,
            _ => RuleKind::Unsupported,
        }
    }
}

/// Trait for rule dialect adapters
pub trait RuleAdapter: Send + Sync {
    /// Extract the raw domain carried by one rule line, if any.
    ///
    /// The result is not validated; lines without a domain yield `None`.
    fn extract(&self, line: &str) -> Option<String>;
}

/// Adblock adapter - only `||domain` host anchors
#[derive(Debug, Clone, Default)]
pub struct AdblockAdapter;

impl RuleAdapter for AdblockAdapter {
    fn extract(&self, line: &str) -> Option<String> {
        let captures = ADBLOCK_PATTERN.captures(line.trim())?;
        let domain = captures.get(1)?.as_str().trim_start_matches('.');
        if domain.is_empty() {
            return None;
        }
        Some(domain.to_string())
    }
}

/// Clash adapter - `DOMAIN,`, `DOMAIN-SUFFIX,`, wildcard markers and bare domains
#[derive(Debug, Clone, Default)]
pub struct ClashAdapter {
    /// Also cut Adblock `$options`, skip exception and regexp rules
    extended: bool,
}

impl ClashAdapter {
    pub fn basic() -> Self {
        Self { extended: false }
    }

    pub fn extended() -> Self {
        Self { extended: true }
    }

    fn is_skipped(&self, line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        SKIP_PREFIXES.iter().any(|p| lower.starts_with(*p))
            || (self.extended && EXTENDED_SKIP_PREFIXES.iter().any(|p| lower.starts_with(*p)))
    }
}

impl RuleAdapter for ClashAdapter {
    fn extract(&self, line: &str) -> Option<String> {
        let line = strip_quotes(strip_yaml_bullet(strip_inline_comment(line.trim())));

        let line = if self.extended {
            if line.starts_with('@') {
                return None;
            }
            line.split('$').next().unwrap_or(line)
        } else {
            line
        };
        let cleaned = line.replace(['|', '^'], "");
        let line = strip_quotes(&cleaned);

        if line.is_empty() || self.is_skipped(line) {
            return None;
        }

        if let Some((keyword, rest)) = line.split_once(',') {
            return match RuleKind::from_keyword(keyword) {
                RuleKind::Domain | RuleKind::DomainSuffix => {
                    let value = strip_quotes(rest.split(',').next().unwrap_or(rest));
                    strip_wildcard(value)
                }
                RuleKind::Unsupported => None,
            };
        }

        // Bare token: must be a single word containing a dot
        if line.contains(char::is_whitespace) || !line.contains('.') {
            return None;
        }
        strip_wildcard(line)
    }
}

/// Enum wrapper for all adapter types
#[derive(Debug, Clone)]
pub enum Adapter {
    Adblock(AdblockAdapter),
    Clash(ClashAdapter),
}

impl Adapter {
    pub fn for_dialect(dialect: RuleDialect) -> Self {
        match dialect {
            RuleDialect::PlainAdblock => Adapter::Adblock(AdblockAdapter),
            RuleDialect::ClashExtended => Adapter::Clash(ClashAdapter::extended()),
            RuleDialect::ClashBasic => Adapter::Clash(ClashAdapter::basic()),
        }
    }
}

impl RuleAdapter for Adapter {
    fn extract(&self, line: &str) -> Option<String> {
        match self {
            Adapter::Adblock(a) => a.extract(line),
            Adapter::Clash(a) => a.extract(line),
        }
    }
}

/// Extract the raw domain from one line using the given dialect's conventions.
pub fn extract(line: &str, dialect: RuleDialect) -> Option<String> {
    Adapter::for_dialect(dialect).extract(line)
}

/// Drop a trailing `# comment` that is separated from the rule by whitespace.
fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, _) in line.match_indices('#') {
        if i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return line[..i].trim_end();
        }
    }
    line
}

/// Drop a YAML list bullet: `- DOMAIN,example.com`, `-'+.example.com'` or `-DOMAIN,example.com`.
fn strip_yaml_bullet(line: &str) -> &str {
    match line.strip_prefix('-') {
        Some(rest)
            if rest.starts_with(|c: char| c.is_whitespace() || c == '\'' || c == '"')
                || starts_with_rule_keyword(rest) =>
        {
            rest.trim_start()
        }
        _ => line,
    }
}

/// `DOMAIN-SUFFIX,...`: an uppercase keyword followed by a comma.
fn starts_with_rule_keyword(s: &str) -> bool {
    match s.split_once(',') {
        Some((keyword, _)) => {
            keyword.starts_with(|c: char| c.is_ascii_uppercase())
                && keyword.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'-')
        }
        None => false,
    }
}

fn strip_quotes(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '\'' || c == '"').trim()
}

/// `+.domain`, `*.domain`, `*domain`, `.domain` -> `domain`
fn strip_wildcard(token: &str) -> Option<String> {
    let token = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('*'))
        .unwrap_or(token);
    let token = token.strip_prefix('.').unwrap_or(token);
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
