//! JSON configuration.
//!
//! ```json
//! {
//!   "dialect": "clash-extended",
//!   "sort": "parent-grouped",
//!   "exclusions": {
//!     "country_codes": true,
//!     "suffixes": [".cn"],
//!     "files": ["exclude.txt"]
//!   }
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NormalizeError, Result};
use crate::tld::ExclusionTable;
use crate::types::{RuleDialect, SortPolicy};

/// Sources for the exclusion table; all of them are unioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExclusionConfig {
    /// Include the built-in country-code preset
    pub country_codes: bool,
    /// Inline suffixes (`.jp`, `co.uk`)
    pub suffixes: Vec<String>,
    /// Files holding one suffix per line
    pub files: Vec<PathBuf>,
}

impl ExclusionConfig {
    pub fn is_configured(&self) -> bool {
        self.country_codes || !self.suffixes.is_empty() || !self.files.is_empty()
    }

    /// Build the exclusion table, or `None` when no source is configured.
    pub fn build(&self) -> Result<Option<ExclusionTable>> {
        if !self.is_configured() {
            return Ok(None);
        }

        let mut table = if self.country_codes {
            ExclusionTable::country_codes()
        } else {
            ExclusionTable::default()
        };
        table.merge(ExclusionTable::new(&self.suffixes)?);
        for file in &self.files {
            table.merge(ExclusionTable::from_file(file)?);
        }

        if table.is_empty() {
            warn!("exclusions were configured but the resulting table is empty");
        }
        Ok(Some(table))
    }
}

/// Normalizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub dialect: RuleDialect,
    pub sort: SortPolicy,
    pub exclusions: ExclusionConfig,
}

impl NormalizeConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file.
    ///
    /// Relative exclusion file paths are resolved against the config file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| NormalizeError::io(path, e))?;
        let mut config = Self::from_json(&text).map_err(|e| match e {
            NormalizeError::ConfigParse(inner) => {
                NormalizeError::Config(format!("{}: {}", path.display(), inner))
            }
            other => other,
        })?;

        if let Some(base) = path.parent() {
            for file in &mut config.exclusions.files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }
        Ok(config)
    }
}
