//! Error types for lexicon and engine configuration loading.
//!
//! Classification itself never fails; only reading configuration does.

use thiserror::Error;

/// Errors raised while loading a [`Lexicon`](crate::Lexicon) or
/// [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum StabilityError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML configuration did not parse.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// RON configuration did not parse.
    #[error("invalid RON configuration: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// The file extension names no supported configuration format.
    #[error("unsupported configuration format for {path} (expected .toml or .ron)")]
    UnsupportedFormat { path: String },

    /// A cue category was configured with an empty or blank pattern.
    #[error("blank pattern in `{category}` cue set")]
    BlankPattern { category: &'static str },
}

/// Result type for configuration operations.
pub type StabilityResult<T> = Result<T, StabilityError>;
