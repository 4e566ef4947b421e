//! Lexicon matching with substring false-match suppression.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lexicon::{CueCategory, Lexicon};

/// Cues surviving suppression for one sentence, each in lexicon order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueMatch {
    pub collapse: Vec<String>,
    pub stable: Vec<String>,
    pub solvent: Vec<String>,
}

impl CueMatch {
    /// Any collapse or stable cue survived.
    pub fn has_stability_evidence(&self) -> bool {
        !self.collapse.is_empty() || !self.stable.is_empty()
    }

    pub fn has_solvent(&self) -> bool {
        !self.solvent.is_empty()
    }

    /// Whether any collapse or stable cue contains `needle`.
    pub fn any_stability_cue_contains(&self, needle: &str) -> bool {
        self.collapse
            .iter()
            .chain(self.stable.iter())
            .any(|cue| cue.contains(needle))
    }
}

/// Longer words that legitimately contain a cue without carrying its meaning.
struct Suppression {
    cue_marker: &'static str,
    wrappers: &'static [&'static str],
}

const STABLE_SUPPRESSIONS: &[Suppression] = &[
    Suppression {
        cue_marker: "stable",
        wrappers: &["unstable", "instable", "adjustable"],
    },
    Suppression {
        cue_marker: "stability",
        wrappers: &["instability"],
    },
];

const SOLVENT_SUPPRESSIONS: &[Suppression] = &[Suppression {
    cue_marker: "activat",
    wrappers: &["deactivat"],
}];

/// `true` when every occurrence of `needle` in `text` sits inside one of
/// `wrappers`. A needle that never occurs is not considered wrapped.
fn only_inside(text: &str, needle: &str, wrappers: &[&str]) -> bool {
    let mut occurrences = text.match_indices(needle).peekable();
    if occurrences.peek().is_none() {
        return false;
    }
    occurrences.all(|(start, _)| {
        wrappers.iter().any(|wrapper| {
            wrapper.match_indices(needle).any(|(offset, _)| {
                start >= offset
                    && text
                        .get(start - offset..)
                        .map_or(false, |rest| rest.starts_with(wrapper))
            })
        })
    })
}

fn suppress(text: &str, cues: &mut Vec<String>, suppressions: &[Suppression]) {
    for suppression in suppressions {
        if !cues.iter().any(|cue| cue.contains(suppression.cue_marker)) {
            continue;
        }
        cues.retain(|cue| {
            let is_wrapper = suppression.wrappers.iter().any(|w| cue.contains(w));
            !(is_wrapper || only_inside(text, cue, suppression.wrappers))
        });
    }
}

/// Scans sentence text against the lexicon.
#[derive(Debug, Clone)]
pub struct CueScanner {
    lexicon: Arc<Lexicon>,
}

impl Default for CueScanner {
    fn default() -> Self {
        Self::new(Lexicon::shared_default())
    }
}

impl CueScanner {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn scan(&self, text: &str) -> CueMatch {
        let owned = |category: CueCategory| -> Vec<String> {
            self.lexicon
                .matches_in(category, text)
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        let mut cues = CueMatch {
            collapse: owned(CueCategory::Collapse),
            stable: owned(CueCategory::Stable),
            solvent: owned(CueCategory::Solvent),
        };

        suppress(text, &mut cues.stable, STABLE_SUPPRESSIONS);
        suppress(text, &mut cues.solvent, SOLVENT_SUPPRESSIONS);

        if cues.solvent.len() == 1
            && cues.solvent[0] == "loss"
            && self.lexicon.any_in(CueCategory::LossConfound, text)
        {
            cues.solvent.clear();
        }

        cues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner_with(toml: &str) -> CueScanner {
        CueScanner::new(Arc::new(Lexicon::from_toml_str(toml).unwrap()))
    }

    #[test]
    fn test_default_scan() {
        let cues = CueScanner::default()
            .scan("Upon solvent removal the framework collapsed and lost porosity.");
        assert_eq!(cues.collapse, vec!["collaps"]);
        assert_eq!(cues.stable, vec!["porosity"]);
        assert_eq!(cues.solvent, vec!["solvent", "remov"]);
    }

    #[test]
    fn test_leading_space_stable_cue_skips_unstable() {
        let cues = CueScanner::default().scan("The desolvated phase is unstable.");
        assert!(cues.stable.is_empty());
        assert_eq!(cues.collapse, vec!["unstable"]);
    }

    #[test]
    fn test_stable_inside_unstable_suppressed() {
        let scanner = scanner_with(r#"stable = ["stable", "unstable"]"#);
        let cues = scanner.scan("The phase is unstable.");
        assert!(cues.stable.is_empty());
    }

    #[test]
    fn test_stable_kept_when_standalone_occurrence_exists() {
        let scanner = scanner_with(r#"stable = ["stable"]"#);
        let cues = scanner.scan("One phase is unstable, the other is stable.");
        assert_eq!(cues.stable, vec!["stable"]);
    }

    #[test]
    fn test_instability_suppressed() {
        let cues = CueScanner::default().scan("Its instability on guest removal is known.");
        assert!(cues.stable.is_empty());
        assert_eq!(cues.collapse, vec!["instability"]);
    }

    #[test]
    fn test_instable_and_adjustable_suppressed() {
        let scanner = scanner_with(r#"stable = ["stable"]"#);
        assert!(scanner.scan("The instable phase formed on desolvation.").stable.is_empty());
        assert!(scanner.scan("An adjustable pore size was reported.").stable.is_empty());
        assert_eq!(
            scanner.scan("The adjustable framework remained stable.").stable,
            vec!["stable"]
        );
    }

    #[test]
    fn test_deactivation_not_activation() {
        let cues = CueScanner::default().scan("The guests deactivate the collapsed sites.");
        assert_eq!(cues.solvent, vec!["guest"]);
    }

    #[test]
    fn test_loss_confound_clears_lone_loss_cue() {
        let scanner = scanner_with(r#"solvent = ["loss", "remov"]"#);
        assert!(scanner
            .scan("A loss of crystallinity indicated collapse.")
            .solvent
            .is_empty());
        assert_eq!(
            scanner.scan("A loss of mass indicated collapse.").solvent,
            vec!["loss"]
        );
        assert_eq!(
            scanner
                .scan("On removal, a loss of crystallinity indicated collapse.")
                .solvent,
            vec!["loss", "remov"]
        );
    }

    #[test]
    fn test_only_inside() {
        assert!(only_inside("is unstable", "stable", &["unstable"]));
        assert!(!only_inside("unstable or stable", "stable", &["unstable"]));
        assert!(!only_inside("nothing here", "stable", &["unstable"]));
    }
}
