use std::path::PathBuf;

use thiserror::Error;

/// Rule list normalizer error types
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid exclusion suffix: {0}")]
    InvalidExclusion(String),
}

impl NormalizeError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
