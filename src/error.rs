//! Error types for graph construction, sampling and export

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, sampling or exporting a social graph
#[derive(Error, Debug)]
pub enum EgonetError {
    /// A file or directory could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An edge line that is not two non-negative integers (strict parsing)
    #[error("Malformed edge line {line} in {}: {reason} (line: {content:?})", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
        reason: String,
    },

    /// Sample size larger than the number of nodes available
    #[error("Sample size {requested} exceeds the {available} nodes available")]
    SampleTooLarge { requested: usize, available: usize },

    /// The input directory holds no edge files
    #[error("No edge files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML configuration could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EgonetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EgonetError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type EgonetResult<T> = Result<T, EgonetError>;
