//! Label-aware suffix exclusion.
//!
//! A domain is excluded when one of its label-aligned suffixes is in the table:
//! `.jp` excludes `jp`, `example.jp` and `a.example.jp`, but never
//! `foojphj.com` or `xxjp`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{NormalizeError, Result};
use crate::types::Domain;

/// Country-code suffixes carried as a ready-made preset.
pub const COUNTRY_CODE_TLDS: &[&str] = &[
    // Asia
    ".jp", ".kr", ".in", ".id", ".th", ".sg", ".my", ".ph", ".vn", ".pk", ".bd", ".lk", ".np",
    ".mn", ".uz", ".kz", ".kg", ".bt", ".mv", ".mm",
    // Europe
    ".uk", ".de", ".fr", ".it", ".es", ".ru", ".nl", ".be", ".ch", ".at", ".pl", ".cz", ".se",
    ".no", ".fi", ".dk", ".gr", ".pt", ".ie", ".hu", ".ro", ".bg", ".sk", ".si", ".lt", ".lv",
    ".ee", ".is", ".md", ".ua", ".by", ".am", ".ge",
    // Americas
    ".us", ".ca", ".mx", ".br", ".ar", ".cl", ".co", ".pe", ".ve", ".uy", ".py", ".bo", ".ec",
    ".cr", ".pa", ".do", ".gt", ".sv", ".hn", ".ni", ".jm", ".cu",
    // Africa
    ".za", ".eg", ".ng", ".ke", ".gh", ".tz", ".ug", ".dz", ".ma", ".tn", ".ly", ".ci", ".sn",
    ".zm", ".zw", ".ao", ".mz", ".bw", ".na", ".rw", ".mw", ".sd",
    // Oceania
    ".au", ".nz", ".fj", ".pg", ".sb", ".vu", ".nc", ".pf", ".ws", ".to", ".ki", ".tv", ".nr",
    ".as",
    // Middle East
    ".sa", ".ae", ".ir", ".il", ".iq", ".tr", ".sy", ".jo", ".lb", ".om", ".qa", ".ye", ".kw",
    ".bh",
];

/// Immutable set of excluded suffixes.
///
/// Suffixes are stored lowercased and without their leading dot, so a lookup
/// is one hash lookup per domain level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionTable {
    suffixes: HashSet<String>,
}

impl ExclusionTable {
    /// Build a table from suffix strings (`.jp`, `jp`, `.co.uk`).
    ///
    /// Blank entries and `#` comments are skipped.
    pub fn new<I, S>(suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for suffix in suffixes {
            table.insert(suffix.as_ref())?;
        }
        Ok(table)
    }

    /// The built-in country-code preset.
    pub fn country_codes() -> Self {
        Self {
            suffixes: COUNTRY_CODE_TLDS
                .iter()
                .map(|s| s.trim_start_matches('.').to_string())
                .collect(),
        }
    }

    /// Load suffixes from a file, one per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| NormalizeError::io(path, e))?;
        Self::new(text.lines())
    }

    /// Add every suffix of `other` to this table.
    pub fn merge(&mut self, other: ExclusionTable) {
        self.suffixes.extend(other.suffixes);
    }

    fn insert(&mut self, raw: &str) -> Result<()> {
        let entry = raw.trim();
        if entry.is_empty() || entry.starts_with('#') {
            return Ok(());
        }

        let suffix = entry.strip_prefix('.').unwrap_or(entry).to_ascii_lowercase();
        let well_formed = !suffix.is_empty()
            && suffix
                .split('.')
                .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-'));
        if !well_formed {
            return Err(NormalizeError::InvalidExclusion(entry.to_string()));
        }

        self.suffixes.insert(suffix);
        Ok(())
    }

    /// Check whether `domain` ends with an excluded suffix on a label boundary.
    pub fn is_excluded(&self, domain: &Domain) -> bool {
        if self.suffixes.is_empty() {
            return false;
        }

        let name = domain.as_str();
        if self.suffixes.contains(name) {
            return true;
        }

        // Walk up the domain hierarchy, one lookup per level
        let mut pos = 0;
        while let Some(dot_pos) = name[pos..].find('.') {
            let parent = &name[pos + dot_pos + 1..];
            if self.suffixes.contains(parent) {
                return true;
            }
            pos += dot_pos + 1;
        }

        false
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// Check whether `domain` must be dropped under `table`.
pub fn is_excluded(domain: &Domain, table: &ExclusionTable) -> bool {
    table.is_excluded(domain)
}
