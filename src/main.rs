//! Rule List Normalizer CLI
//!
//! Rewrites a rule list in place as a sorted, deduplicated domain list.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rulelist_normalizer::{normalize_file, NormalizeConfig, Pipeline, RuleDialect, SortPolicy};

#[derive(Parser)]
#[command(name = "rulelist-normalizer")]
#[command(about = "Normalize adblock and Clash rule lists into a sorted domain list")]
struct Cli {
    /// Rule list to normalize (overwritten in place unless --output is given)
    path: PathBuf,

    /// Rule dialect: plain-adblock, clash-extended or clash-basic [default: clash-basic]
    #[arg(short, long)]
    dialect: Option<RuleDialect>,

    /// Output order: lexicographic or parent-grouped [default: lexicographic]
    #[arg(short, long)]
    sort: Option<SortPolicy>,

    /// Exclude the built-in country-code TLD preset
    #[arg(long)]
    exclude_cctld: bool,

    /// Extra suffix to exclude (repeatable), e.g. --exclude .cn
    #[arg(long, value_name = "SUFFIX")]
    exclude: Vec<String>,

    /// File of suffixes to exclude, one per line (repeatable)
    #[arg(long, value_name = "FILE")]
    exclude_file: Vec<PathBuf>,

    /// JSON config file; command line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the result here instead of overwriting PATH
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cmd_normalize(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_normalize(cli: Cli) -> rulelist_normalizer::Result<()> {
    let config = build_config(&cli)?;
    let pipeline = Pipeline::from_config(&config)?;
    let normalized = normalize_file(&pipeline, &cli.path, cli.output.as_deref())?;

    let written = cli.output.as_ref().unwrap_or(&cli.path);
    println!(
        "Done, {} domains written to '{}'",
        normalized.len(),
        written.display()
    );

    Ok(())
}

/// Load the config file, if any, and lay the command line flags over it.
///
/// Dialect and sort flags replace the configured values; exclusions are added
/// to the configured ones.
fn build_config(cli: &Cli) -> rulelist_normalizer::Result<NormalizeConfig> {
    let mut config = match &cli.config {
        Some(path) => NormalizeConfig::from_file(path)?,
        None => NormalizeConfig::default(),
    };

    if let Some(dialect) = cli.dialect {
        config.dialect = dialect;
    }
    if let Some(sort) = cli.sort {
        config.sort = sort;
    }
    config.exclusions.country_codes |= cli.exclude_cctld;
    config.exclusions.suffixes.extend(cli.exclude.iter().cloned());
    config.exclusions.files.extend(cli.exclude_file.iter().cloned());

    Ok(config)
}
