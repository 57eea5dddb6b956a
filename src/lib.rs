//! Rule List Normalizer - turn adblock and Clash rule lists into a canonical domain list
//!
//! This library reduces a mixed rule list to one domain per line:
//! - Rule syntax extraction (Adblock `||domain`, Clash `DOMAIN,` / `DOMAIN-SUFFIX,`, wildcards, YAML)
//! - Syntactic domain validation
//! - Suffix subsumption (`ads.example.com` collapses into `example.com`)
//! - Label-aware suffix exclusion (`.jp` drops `foo.jp`, never `foojp.com`)
//! - Deterministic ordering
//!
//! # Example
//!
//! ```rust
//! use rulelist_normalizer::{ExclusionTable, Pipeline, RuleDialect};
//!
//! let rules_text = "
//! ||ads.example.com^
//! ||example.com^
//! ||tracker.example.jp^
//! ||unrelated.org^
//! ";
//!
//! let pipeline = Pipeline::new(RuleDialect::PlainAdblock)
//!     .with_exclusions(ExclusionTable::new([".jp"]).unwrap());
//!
//! let normalized = pipeline.run(rules_text.lines());
//! assert_eq!(normalized.render(), "example.com\nunrelated.org\n");
//! ```
//!
//! # Dialects
//!
//! | Dialect | Accepted forms |
//! |---------|----------------|
//! | `plain-adblock` | `\|\|example.com^` |
//! | `clash-basic` | `DOMAIN,example.com`, `DOMAIN-SUFFIX,example.com`, `+.example.com`, `*.example.com`, `.example.com`, `example.com`, `\|\|example.com^`, YAML `- '...'` entries |
//! | `clash-extended` | `clash-basic` plus Adblock `$options`; skips `@@` exceptions and `regexp` rules |
//!
//! IP-CIDR, IP-CIDR6, IP-SUFFIX, DOMAIN-KEYWORD, PROCESS-NAME, GEOIP and GEOSITE rules,
//! comments and section headers never produce a domain.

pub mod config;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod reducer;
pub mod sorter;
pub mod tld;
pub mod types;
pub mod validator;

// Re-export commonly used items
pub use config::{ExclusionConfig, NormalizeConfig};
pub use error::{NormalizeError, Result};
pub use parser::{extract, Adapter, AdblockAdapter, ClashAdapter, RuleAdapter, RuleKind};
pub use pipeline::{normalize_file, run, Normalized, Pipeline, RunStats};
pub use reducer::{compare_reversed_labels, reduce};
pub use sorter::sort;
pub use tld::{is_excluded, ExclusionTable, COUNTRY_CODE_TLDS};
pub use types::{Domain, DomainSet, OutputList, RuleDialect, SortPolicy};
pub use validator::is_valid;
