//! Error types for corpus input and output.

use layered_stability::StabilityError;
use thiserror::Error;

/// Errors that can occur while reading, mining, or writing a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus or output file could not be opened, read, or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not a JSON array of documents.
    #[error("invalid corpus JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output records could not be serialized.
    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A thermal phrase did not compile to a matcher.
    #[error("invalid thermal phrase: {0}")]
    Pattern(#[from] regex::Error),

    /// Engine configuration failed to load.
    #[error(transparent)]
    Config(#[from] StabilityError),
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
