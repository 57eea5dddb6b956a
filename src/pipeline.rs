use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::NormalizeConfig;
use crate::error::{NormalizeError, Result};
use crate::parser::{Adapter, RuleAdapter};
use crate::reducer::reduce;
use crate::sorter::sort;
use crate::tld::ExclusionTable;
use crate::types::{Domain, DomainSet, OutputList, RuleDialect, SortPolicy};

/// Counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input lines seen
    pub lines: usize,
    /// Lines the adapter pulled a raw domain from
    pub extracted: usize,
    /// Extracted strings that failed validation
    pub invalid: usize,
    /// Distinct valid domains
    pub unique: usize,
    /// Domains dropped because an ancestor was present
    pub subsumed: usize,
    /// Domains dropped by the exclusion table
    pub excluded: usize,
    /// Domains in the final list
    pub output: usize,
}

/// Result of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub domains: OutputList,
    pub stats: RunStats,
}

impl Normalized {
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// One domain per line, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.domains.iter().map(|d| d.as_str().len() + 1).sum());
        for domain in &self.domains {
            out.push_str(domain.as_str());
            out.push('\n');
        }
        out
    }
}

/// Adapter -> validator -> dedup -> reducer -> exclusion filter -> sorter
#[derive(Debug, Clone)]
pub struct Pipeline {
    adapter: Adapter,
    exclusions: Option<ExclusionTable>,
    sort_policy: SortPolicy,
}

impl Pipeline {
    pub fn new(dialect: RuleDialect) -> Self {
        Self {
            adapter: Adapter::for_dialect(dialect),
            exclusions: None,
            sort_policy: SortPolicy::default(),
        }
    }

    pub fn from_config(config: &NormalizeConfig) -> Result<Self> {
        let mut pipeline = Self::new(config.dialect).with_sort_policy(config.sort);
        pipeline.exclusions = config.exclusions.build()?;
        Ok(pipeline)
    }

    pub fn with_exclusions(mut self, table: ExclusionTable) -> Self {
        self.exclusions = Some(table);
        self
    }

    pub fn with_sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    /// Normalize a sequence of raw rule lines.
    pub fn run<I, S>(&self, lines: I) -> Normalized
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = RunStats::default();
        let mut domains = DomainSet::new();

        for line in lines {
            stats.lines += 1;
            let Some(raw) = self.adapter.extract(line.as_ref()) else {
                continue;
            };
            stats.extracted += 1;
            match Domain::parse(&raw) {
                Some(domain) => {
                    domains.insert(domain);
                }
                None => stats.invalid += 1,
            }
        }
        stats.unique = domains.len();
        debug!(
            lines = stats.lines,
            extracted = stats.extracted,
            invalid = stats.invalid,
            unique = stats.unique,
            "collected domains"
        );

        let mut domains = reduce(domains);
        stats.subsumed = stats.unique - domains.len();

        if let Some(table) = &self.exclusions {
            let before = domains.len();
            domains.retain(|domain| !table.is_excluded(domain));
            stats.excluded = before - domains.len();
            debug!(excluded = stats.excluded, "applied exclusion table");
        }

        let domains = sort(domains, self.sort_policy);
        stats.output = domains.len();

        Normalized { domains, stats }
    }
}

/// Normalize `lines` written in `dialect`, optionally dropping excluded suffixes.
pub fn run<I, S>(lines: I, dialect: RuleDialect, exclusions: Option<&ExclusionTable>) -> OutputList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pipeline = Pipeline::new(dialect);
    pipeline.exclusions = exclusions.cloned();
    pipeline.run(lines).domains
}

/// Normalize a rule file.
///
/// The whole list is computed in memory before anything is written. With no
/// `output`, `input` is overwritten in place.
pub fn normalize_file(
    pipeline: &Pipeline,
    input: impl AsRef<Path>,
    output: Option<&Path>,
) -> Result<Normalized> {
    let input = input.as_ref();
    let text = fs::read_to_string(input).map_err(|e| NormalizeError::io(input, e))?;

    let normalized = pipeline.run(text.lines());

    let output = output.unwrap_or(input);
    fs::write(output, normalized.render()).map_err(|e| NormalizeError::io(output, e))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        lines = normalized.stats.lines,
        subsumed = normalized.stats.subsumed,
        excluded = normalized.stats.excluded,
        domains = normalized.stats.output,
        "normalized rule list"
    );
    Ok(normalized)
}
