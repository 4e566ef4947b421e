//! Whole-sentence exclusion rules.
//!
//! Each rule is a pure `&str -> bool` check over the raw sentence text
//! (case-sensitive substring matching). A sentence matching any rule is
//! dropped before cue scanning and never produces a classification.

use serde::{Deserialize, Serialize};

const LINKER_DECOMPOSITION: &[&str] = &[
    "decomposition of the organic",
    "decomposition of the linker",
    "linker combustion",
];

const WET_PROCEDURE: &[&str] = &["soak", "suspend", "boil"];

const WATER_STABILITY: &[&str] = &[
    "water stability",
    "water-stability",
    "water stable",
    "water-stable",
    "exposure to water",
    "stable to water",
    "stable in water",
    "water unstable",
    "water instability",
    "stability to water",
    "water treatment",
    "hydrothermal stability",
];

const AIR_STABILITY: &[&str] = &[
    "air stability",
    "air-stability",
    "air stable",
    "air-stable",
    "exposure to air",
    "stable to air",
    "stability to air",
];

const BLOCK_PHRASES: &[&str] = &["building block", "d-block", "d block"];

const BOND_ACTIVATION: &[&str] = &[
    "bond activation",
    "unsaturated bonds",
    "activated bonds",
    "C-H activation",
    "C-C activation",
    "C=C activation",
    "activated C\u{2013}H",
    "small molecule activation",
    "oxygen activation",
];

const MOLECULE_DECOMPOSITION: &[&str] = &[
    "decomposition product",
    "solvent decomposition",
    "guest decomposition",
    "solvent decompose",
    "guest decompose",
];

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

/// The sentence talks about decomposition of the organic linker.
pub fn organic_linker_phrase(text: &str) -> bool {
    contains_any(text, LINKER_DECOMPOSITION)
}

/// The sentence describes wet lab handling or water stability.
pub fn water_phrase(text: &str) -> bool {
    contains_any(text, WET_PROCEDURE) || contains_any(text, WATER_STABILITY)
}

/// The sentence describes stability in air.
pub fn air_phrase(text: &str) -> bool {
    contains_any(text, AIR_STABILITY)
}

/// A cue fires for an unrelated reason: carbon or bond activation, block
/// elements, catalyst deactivation, or decomposition of the solvent itself.
pub fn miscue_phrase(text: &str) -> bool {
    let activ = text.contains("activ");
    (activ && text.contains("carbon"))
        || contains_any(text, BLOCK_PHRASES)
        || text.contains("unsaturated bond")
        || (activ && contains_any(text, BOND_ACTIVATION))
        || text.contains("deactivation")
        || text.contains("inactivation")
        || contains_any(text, MOLECULE_DECOMPOSITION)
        || (text.contains("stable") && text.contains("homogeneous catalyst"))
}

/// Named exclusion rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalsePositiveRule {
    OrganicLinkerDecomposition,
    WaterContext,
    AirContext,
    Miscue,
}

impl FalsePositiveRule {
    pub const ALL: [FalsePositiveRule; 4] = [
        FalsePositiveRule::OrganicLinkerDecomposition,
        FalsePositiveRule::WaterContext,
        FalsePositiveRule::AirContext,
        FalsePositiveRule::Miscue,
    ];

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::OrganicLinkerDecomposition => organic_linker_phrase(text),
            Self::WaterContext => water_phrase(text),
            Self::AirContext => air_phrase(text),
            Self::Miscue => miscue_phrase(text),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OrganicLinkerDecomposition => "organic linker decomposition phrasing",
            Self::WaterContext => "water handling or water stability phrasing",
            Self::AirContext => "air stability phrasing",
            Self::Miscue => "keyword used in an unrelated sense",
        }
    }
}

/// Drops sentences whose cues are known to be false positives.
#[derive(Debug, Clone, Default)]
pub struct FalsePositiveFilter;

impl FalsePositiveFilter {
    pub fn new() -> Self {
        Self
    }

    /// `true` when the sentence must be discarded.
    pub fn filter(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// The first rule that discards the sentence, if any.
    pub fn first_match(&self, text: &str) -> Option<FalsePositiveRule> {
        FalsePositiveRule::ALL
            .iter()
            .copied()
            .find(|rule| rule.matches(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linker_decomposition() {
        assert!(organic_linker_phrase(
            "The second step corresponds to decomposition of the linker."
        ));
        assert!(!organic_linker_phrase("The linker was decomposed."));
    }

    #[test]
    fn test_water_procedure_words() {
        assert!(water_phrase("The crystals were soaked in methanol."));
        assert!(water_phrase("After boiling, the framework was intact."));
        assert!(water_phrase("The MOF is water-stable."));
        assert!(!water_phrase("Water was removed under vacuum."));
    }

    #[test]
    fn test_air_phrase() {
        assert!(air_phrase("Its air stability is remarkable."));
        assert!(!air_phrase("The sample was dried in air."));
    }

    #[test]
    fn test_activation_needs_context() {
        assert!(miscue_phrase("The activated carbon was used as reference."));
        assert!(miscue_phrase("The MOF catalyzes C-H activation."));
        assert!(!miscue_phrase("Thermal activation removed the guests."));
        assert!(!miscue_phrase("Activated carbon was used as reference."));
    }

    #[test]
    fn test_bond_activation_with_activ_prefix() {
        // "bond activation" itself contains "activ"
        assert!(miscue_phrase("It enables oxygen activation at room temperature."));
    }

    #[test]
    fn test_deactivation_and_inactivation() {
        assert!(miscue_phrase("Catalyst deactivation followed framework collapse."));
        assert!(miscue_phrase("Thermal inactivation of the sites was observed."));
        assert!(!miscue_phrase("Thermal activation preserved the framework."));
    }

    #[test]
    fn test_solvent_and_guest_decomposition() {
        assert!(miscue_phrase("The decomposition products of DMF were detected."));
        assert!(miscue_phrase("Above 200 C solvent decomposition occurs."));
        assert!(miscue_phrase("The guest decomposes before the framework collapses."));
        assert!(miscue_phrase("Trapped guest decomposition was observed."));
        assert!(!miscue_phrase("Framework decomposition began at 400 C."));
    }

    #[test]
    fn test_unsaturated_bonds_and_d_block() {
        assert!(miscue_phrase("The linker carries unsaturated bonds."));
        assert!(miscue_phrase("Late d-block metals form stable nodes."));
        assert!(miscue_phrase("Most d block nodes were retained."));
        assert!(!miscue_phrase("Coordinatively unsaturated sites were retained."));
    }

    #[test]
    fn test_homogeneous_catalyst_requires_stable() {
        assert!(miscue_phrase("It is more stable than the homogeneous catalyst."));
        assert!(!miscue_phrase("The homogeneous catalyst was removed."));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!FalsePositiveFilter::new().filter("Soak time was 3 h."));
        assert!(FalsePositiveFilter::new().filter("Samples were soaked for 3 h."));
    }

    #[test]
    fn test_first_match_order() {
        let filter = FalsePositiveFilter::new();
        assert_eq!(
            filter.first_match("The air-stable MOF was soaked in water."),
            Some(FalsePositiveRule::WaterContext)
        );
        assert_eq!(
            filter.first_match("The framework retained crystallinity after activation."),
            None
        );
    }
}
