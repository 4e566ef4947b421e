//! Pipeline configuration.

use std::path::Path;

use layered_stability::{DecisionSynthesizer, EngineConfig, FallbackPolicy};

use crate::errors::SpecResult;

/// Configuration for the fixture pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub engine: EngineConfig,
}

impl PipelineConfig {
    /// Built-in lexicon and default decision policy.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Run fixtures under a specific fallback policy.
    pub fn with_fallback(fallback: FallbackPolicy) -> Self {
        Self {
            engine: EngineConfig {
                fallback,
                ..EngineConfig::default()
            },
        }
    }

    /// Load an engine configuration file (`.toml` or `.ron`).
    pub fn load(path: &Path) -> SpecResult<Self> {
        Ok(Self {
            engine: EngineConfig::load(path)?,
        })
    }

    pub fn build(&self) -> DecisionSynthesizer {
        DecisionSynthesizer::new(&self.engine)
    }
}
