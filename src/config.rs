//! Engine configuration: the cue lexicon plus decision policy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decision::FallbackPolicy;
use crate::error::StabilityResult;
use crate::lexicon::{config_format, read_config, ConfigFormat, Lexicon};

/// Everything that can change classification without a code change.
///
/// ```toml
/// fallback = "always"
///
/// [lexicon]
/// collapse = ["collaps", "amorph"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub lexicon: Lexicon,
    pub fallback: FallbackPolicy,
}

impl EngineConfig {
    pub fn from_toml_str(input: &str) -> StabilityResult<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_ron_str(input: &str) -> StabilityResult<Self> {
        Ok(ron::from_str(input)?)
    }

    /// Load a `.toml` or `.ron` configuration file.
    pub fn load(path: &Path) -> StabilityResult<Self> {
        let content = read_config(path)?;
        let config = match config_format(path)? {
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
            ConfigFormat::Ron => Self::from_ron_str(&content)?,
        };
        tracing::debug!(path = %path.display(), fallback = ?config.fallback, "engine config loaded");
        Ok(config)
    }
}
