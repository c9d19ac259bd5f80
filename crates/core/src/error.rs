//! Error types for the molvoc vocabulary generator.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vocabulary generation.
#[derive(Error, Debug)]
pub enum VocabError {
    /// Invalid configuration (bad grammar name, bad parameter value)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Frequency table growth failure
    #[error("Allocation failure: {0}")]
    Allocation(String),

    /// A saved vocabulary artifact that cannot be structurally parsed
    #[error("Malformed artifact: {0}")]
    MalformedArtifact(String),
}

impl VocabError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, VocabError>;
