//! Error types for canto lookups and aggregates

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a repository operation can surface.
#[derive(Debug, Error)]
pub enum CantoError {
    /// Malformed canto identifier, filename or search word
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Canto number outside 1..=34
    #[error("canto {0} not found: canto_number must be between 1 and 34")]
    CantoNotFound(i64),

    /// File or directory could not be opened, read or written
    #[error("error while accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mean requested over zero canto files
    #[error("mean verses per file is undefined for a directory without canto files")]
    DivisionUndefined,

    /// Word-count cache could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CantoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CantoError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CantoError>;
