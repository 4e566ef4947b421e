//! Cue lexicon for stability mining.
//!
//! A [`Lexicon`] maps each [`CueCategory`] to an ordered list of substring
//! patterns. It is built once, never mutated, and shared by reference between
//! every component of the engine.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{StabilityError, StabilityResult};

/// Cue categories known to the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueCategory {
    /// Framework collapse or instability phrasing ("collaps", "amorph")
    Collapse,
    /// Retained stability phrasing ("crystallinity", "retain")
    Stable,
    /// Solvent or guest removal phrasing ("desolv", "activat")
    Solvent,
    /// Single-token negation words ("not", "without", "lack")
    Negation,
    /// Thermogravimetric analysis context ("TGA", "weight loss")
    TgaContext,
    /// Phrases where "loss" refers to crystallinity or porosity, not solvent
    LossConfound,
}

impl CueCategory {
    pub const ALL: [CueCategory; 6] = [
        CueCategory::Collapse,
        CueCategory::Stable,
        CueCategory::Solvent,
        CueCategory::Negation,
        CueCategory::TgaContext,
        CueCategory::LossConfound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collapse => "collapse",
            Self::Stable => "stable",
            Self::Solvent => "solvent",
            Self::Negation => "negation",
            Self::TgaContext => "tga_context",
            Self::LossConfound => "loss_confound",
        }
    }
}

const COLLAPSE_CUES: &[&str] = &[
    "collaps",
    "deform",
    "amorph",
    "blockage",
    "degrad",
    "transform",
    "unstable",
    "instability",
    "destroy",
    "one step weight",
    "one-step weight",
    "one\u{2010}step weight",
    "single-step weight",
    "single\u{2010}step weight",
    "single step weight",
    "one weight",
];

// " stable" keeps its leading space so it does not fire inside "unstable".
const STABLE_CUES: &[&str] = &[
    "stability",
    " stable",
    "integrity",
    "preserv",
    "transparency",
    "crystallinity",
    "coordinatively unsaturat",
    "porosity",
    "microporosity",
    "retain",
    "maintain",
    "two step weight",
    "two-step weight",
    "two\u{2010}step weight",
    "second weight",
    "third weight",
    "two weight",
];

const SOLVENT_CUES: &[&str] = &[
    "solvent",
    "solvate",
    "guest",
    "desolv",
    "remov",
    "capillary",
    "activat",
    "evacuat",
    "dehydrat",
    "eliminat",
    "lose",
    "losing",
    "water",
    "DMF",
    "DMA",
    "DEF",
    "H2O",
    "EtOH",
    "MeOH",
    "ethanol",
    "methylamine",
    "diamine",
    "formamide",
    "pyrrolidone",
];

const NEGATION_WORDS: &[&str] = &[
    "no",
    "not",
    "never",
    "fail",
    "miss",
    "missed",
    "missing",
    "lack",
    "lacked",
    "lacking",
    "slow",
    "decrease",
    "decreased",
    "decreases",
    "decreasing",
    "lose",
    "loses",
    "losing",
    "loss",
    "lost",
    "without",
    "absence",
    "minimal",
    "poor",
    "diminish",
    "diminishing",
    "diminishes",
    "diminished",
    "prevent",
    "prevented",
    "preventing",
    "prevents",
    "difficulty",
    "difficult",
    "mitigate",
    "mitigates",
    "mitigating",
    "mitigated",
    "challenging",
    "challenges",
    "challenged",
    "challenge",
    "reduce",
    "reduces",
    "reducing",
    "reduced",
];

const TGA_CONTEXT: &[&str] = &[
    "TGA",
    "TG",
    "thermogravimetric",
    "thermal analysis",
    "thermal gravimetric",
    "thermal-gravimetric",
    "thermal\u{2010}gravimetric",
    "gravimetric",
    "weight loss",
];

const LOSS_CONFOUNDS: &[&str] = &[
    "loss of crystallinity",
    "crystallinity loss",
    "crystallinity is lost",
    "loss of porosity",
    "loss of microporosity",
    "porosity loss",
    "porosity is lost",
];

static DEFAULT_LEXICON: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::builtin()));

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

/// Immutable cue table.
///
/// Deserializes from TOML or RON with every category optional; a missing
/// category keeps its built-in patterns. Blank patterns are rejected by every
/// deserializer, not only the `from_*` constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LexiconTable")]
pub struct Lexicon {
    collapse: Vec<String>,
    stable: Vec<String>,
    solvent: Vec<String>,
    negation: Vec<String>,
    tga_context: Vec<String>,
    loss_confound: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Unvalidated form of a [`Lexicon`] as it appears in configuration files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct LexiconTable {
    collapse: Vec<String>,
    stable: Vec<String>,
    solvent: Vec<String>,
    negation: Vec<String>,
    tga_context: Vec<String>,
    loss_confound: Vec<String>,
}

impl Default for LexiconTable {
    fn default() -> Self {
        let Lexicon {
            collapse,
            stable,
            solvent,
            negation,
            tga_context,
            loss_confound,
        } = Lexicon::builtin();
        Self {
            collapse,
            stable,
            solvent,
            negation,
            tga_context,
            loss_confound,
        }
    }
}

impl TryFrom<LexiconTable> for Lexicon {
    type Error = StabilityError;

    fn try_from(table: LexiconTable) -> StabilityResult<Self> {
        Self::from_parts(
            table.collapse,
            table.stable,
            table.solvent,
            table.negation,
            table.tga_context,
            table.loss_confound,
        )
    }
}

impl Lexicon {
    fn builtin() -> Self {
        Self {
            collapse: owned(COLLAPSE_CUES),
            stable: owned(STABLE_CUES),
            solvent: owned(SOLVENT_CUES),
            negation: owned(NEGATION_WORDS),
            tga_context: owned(TGA_CONTEXT),
            loss_confound: owned(LOSS_CONFOUNDS),
        }
    }

    /// The built-in lexicon, constructed once per process.
    pub fn shared_default() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Build a lexicon from explicit pattern lists, validating every entry.
    pub fn from_parts(
        collapse: Vec<String>,
        stable: Vec<String>,
        solvent: Vec<String>,
        negation: Vec<String>,
        tga_context: Vec<String>,
        loss_confound: Vec<String>,
    ) -> StabilityResult<Self> {
        Self {
            collapse,
            stable,
            solvent,
            negation,
            tga_context,
            loss_confound,
        }
        .validated()
    }

    /// Parse a lexicon from TOML, e.g. `collapse = ["collaps", "amorph"]`.
    pub fn from_toml_str(input: &str) -> StabilityResult<Self> {
        let table: LexiconTable = toml::from_str(input)?;
        Self::try_from(table)
    }

    /// Parse a lexicon from RON, e.g. `(collapse: ["collaps"])`.
    pub fn from_ron_str(input: &str) -> StabilityResult<Self> {
        let table: LexiconTable = ron::from_str(input)?;
        Self::try_from(table)
    }

    /// Load a lexicon file, choosing the format from its extension.
    pub fn load(path: &Path) -> StabilityResult<Self> {
        let content = read_config(path)?;
        match config_format(path)? {
            ConfigFormat::Toml => Self::from_toml_str(&content),
            ConfigFormat::Ron => Self::from_ron_str(&content),
        }
    }

    fn validated(self) -> StabilityResult<Self> {
        for category in CueCategory::ALL {
            if self.patterns(category).iter().any(|p| p.trim().is_empty()) {
                return Err(StabilityError::BlankPattern {
                    category: category.as_str(),
                });
            }
        }
        Ok(self)
    }

    /// Patterns of one category, in configured order.
    pub fn patterns(&self, category: CueCategory) -> &[String] {
        match category {
            CueCategory::Collapse => &self.collapse,
            CueCategory::Stable => &self.stable,
            CueCategory::Solvent => &self.solvent,
            CueCategory::Negation => &self.negation,
            CueCategory::TgaContext => &self.tga_context,
            CueCategory::LossConfound => &self.loss_confound,
        }
    }

    /// Patterns of `category` occurring as substrings of `text`, in lexicon order.
    pub fn matches_in<'a>(&'a self, category: CueCategory, text: &str) -> Vec<&'a str> {
        self.patterns(category)
            .iter()
            .filter(|pattern| text.contains(pattern.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Whether any pattern of `category` occurs in `text`.
    pub fn any_in(&self, category: CueCategory, text: &str) -> bool {
        self.patterns(category)
            .iter()
            .any(|pattern| text.contains(pattern.as_str()))
    }

    /// Whether a whitespace-trimmed dependency token is a negation word.
    pub fn is_negation(&self, token: &str) -> bool {
        let token = token.trim();
        self.negation.iter().any(|word| word == token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigFormat {
    Toml,
    Ron,
}

pub(crate) fn config_format(path: &Path) -> StabilityResult<ConfigFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("ron") => Ok(ConfigFormat::Ron),
        _ => Err(StabilityError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

pub(crate) fn read_config(path: &Path) -> StabilityResult<String> {
    fs::read_to_string(path).map_err(|source| StabilityError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_categories_populated() {
        let lexicon = Lexicon::default();
        for category in CueCategory::ALL {
            assert!(
                !lexicon.patterns(category).is_empty(),
                "{} is empty",
                category.as_str()
            );
        }
        assert!(lexicon.patterns(CueCategory::Stable).contains(&" stable".to_string()));
    }

    #[test]
    fn test_matches_in_preserves_lexicon_order() {
        let lexicon = Lexicon::default();
        let matches = lexicon.matches_in(
            CueCategory::Collapse,
            "the amorphous phase formed after the framework collapsed",
        );
        assert_eq!(matches, vec!["collaps", "amorph"]);
    }

    #[test]
    fn test_negation_is_whole_token() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation(" without "));
        assert!(!lexicon.is_negation("nothing"));
        assert!(!lexicon.is_negation("Not"));
    }

    #[test]
    fn test_partial_toml_keeps_builtin_categories() {
        let lexicon = Lexicon::from_toml_str(r#"collapse = ["collaps", "crumbl"]"#).unwrap();
        assert_eq!(lexicon.patterns(CueCategory::Collapse).len(), 2);
        assert_eq!(
            lexicon.patterns(CueCategory::Solvent),
            Lexicon::default().patterns(CueCategory::Solvent)
        );
    }

    #[test]
    fn test_ron_lexicon() {
        let lexicon = Lexicon::from_ron_str(r#"(stable: ["robust"])"#).unwrap();
        assert_eq!(lexicon.patterns(CueCategory::Stable), &["robust".to_string()]);
    }

    #[test]
    fn test_blank_pattern_rejected() {
        let err = Lexicon::from_toml_str(r#"solvent = ["  "]"#).unwrap_err();
        assert!(matches!(
            err,
            StabilityError::BlankPattern { category: "solvent" }
        ));
    }

    #[test]
    fn test_blank_pattern_rejected_by_any_deserializer() {
        let err = serde_json::from_str::<Lexicon>(r#"{"solvent": [""]}"#).unwrap_err();
        assert!(err.to_string().contains("blank pattern in `solvent`"));

        let lexicon: Lexicon = serde_json::from_str(r#"{"stable": ["robust"]}"#).unwrap();
        assert_eq!(lexicon.patterns(CueCategory::Stable), &["robust".to_string()]);
        assert_eq!(
            lexicon.patterns(CueCategory::Solvent),
            Lexicon::default().patterns(CueCategory::Solvent)
        );
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, r#"negation = ["not"]"#).unwrap();
        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.patterns(CueCategory::Negation), &["not".to_string()]);

        let unknown = NamedTempFile::new().unwrap();
        assert!(matches!(
            Lexicon::load(unknown.path()),
            Err(StabilityError::UnsupportedFormat { .. })
        ));
    }
}
