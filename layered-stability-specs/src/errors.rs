//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading fixtures or their failure ledger.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The expected-failures ledger did not parse.
    #[error("invalid expected failures file {path}: {source}")]
    Ledger {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Engine configuration for the run did not load.
    #[error(transparent)]
    Engine(#[from] layered_stability::StabilityError),
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
