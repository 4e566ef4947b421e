//! Final label synthesis.
//!
//! [`DecisionSynthesizer`] chains the components:
//!
//! ```text
//! text ─▶ FalsePositiveFilter ─▶ CueScanner ─▶ DependencyNegationResolver ─▶ DoubleNegationAdjudicator
//!                                                          │
//!                                                          ▼
//!                                            post-adjustment rule table
//! ```
//!
//! The base decision comes from the dependency walk (solvent cues present) or
//! is "no solvent kw" (solvent cues absent). Post-adjustments then run as an
//! ordered table where the first matching rule wins.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::cue_scanner::{CueMatch, CueScanner};
use crate::double_negation::DoubleNegationAdjudicator;
use crate::false_positive::{FalsePositiveFilter, FalsePositiveRule};
use crate::label::{Reason, Signal, StabilityLabel};
use crate::lexicon::Lexicon;
use crate::negation::{is_tga_ambiguous, DependencyNegationResolver, NegationEvidence};
use crate::sentence::DependencyEdge;

/// When the bare-keyword fallback ("has collapse kw", "has stable kw",
/// "has both collapse and stability kw") may label a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Only sentences without solvent cues. A solvent sentence whose
    /// dependency walk fired nothing stays at 0 with reason "default".
    #[default]
    NoSolventOnly,
    /// Also sentences with solvent cues whose dependency walk fired no
    /// rule ("default"). Multistep, loss-confound and unclear double
    /// negative outcomes still keep their label.
    Always,
}

/// One emitted classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: StabilityLabel,
    pub reason: Reason,
    pub solvent_present: bool,
    pub stability_present: bool,
}

/// Everything the engine concluded about one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum SentenceAnalysis {
    /// A false-positive rule dropped the sentence.
    Discarded(FalsePositiveRule),
    /// Neither collapse nor stable cues survived scanning.
    NoCues,
    Classified {
        cues: CueMatch,
        result: ClassificationResult,
        evidence: NegationEvidence,
    },
}

impl SentenceAnalysis {
    pub fn result(&self) -> Option<ClassificationResult> {
        match self {
            Self::Classified { result, .. } => Some(*result),
            _ => None,
        }
    }

    pub fn cues(&self) -> Option<&CueMatch> {
        match self {
            Self::Classified { cues, .. } => Some(cues),
            _ => None,
        }
    }
}

impl fmt::Display for SentenceAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discarded(rule) => write!(f, "discarded: {}", rule.description()),
            Self::NoCues => write!(f, "skipped: no collapse or stable cues"),
            Self::Classified {
                cues,
                result,
                evidence,
            } => {
                writeln!(f, "collapse: {:?}", cues.collapse)?;
                writeln!(f, "stable:   {:?}", cues.stable)?;
                writeln!(f, "solvent:  {:?}", cues.solvent)?;
                if !evidence.checked_tokens.is_empty() || evidence.double_negative {
                    writeln!(
                        f,
                        "negated:  {:?}{}",
                        evidence.checked_tokens,
                        if evidence.double_negative {
                            " (double negative)"
                        } else {
                            ""
                        }
                    )?;
                }
                write!(
                    f,
                    "=> {} \"{}\" solvent={} stability={}",
                    result.label, result.reason, result.solvent_present, result.stability_present
                )
            }
        }
    }
}

/// Working state threaded through the post-adjustment table.
#[derive(Debug, Clone, Copy)]
struct Draft {
    label: StabilityLabel,
    reason: Reason,
    solvent_present: bool,
    tga_ambiguous: bool,
}

impl Draft {
    /// Still at 0 because nothing fired, and the fallback may speak.
    fn open_for_fallback(&self, policy: FallbackPolicy) -> bool {
        self.label == StabilityLabel::Undetermined
            && match policy {
                FallbackPolicy::NoSolventOnly => self.reason == Reason::NoSolvent,
                FallbackPolicy::Always => {
                    matches!(self.reason, Reason::NoSolvent | Reason::Default)
                }
            }
    }
}

struct AdjustmentRule {
    name: &'static str,
    applies: fn(&Draft, &CueMatch, FallbackPolicy) -> bool,
    outcome: (StabilityLabel, Reason),
}

const ADJUSTMENT_RULES: &[AdjustmentRule] = &[
    AdjustmentRule {
        name: "tga override",
        applies: |draft, _, _| draft.tga_ambiguous && !draft.reason.survives_tga_override(),
        outcome: (StabilityLabel::Undetermined, Reason::MultistepTga),
    },
    AdjustmentRule {
        name: "collapse keywords only",
        applies: |draft, cues, policy| {
            draft.open_for_fallback(policy) && !cues.collapse.is_empty() && cues.stable.is_empty()
        },
        outcome: (StabilityLabel::Unstable, Reason::HasCollapse),
    },
    AdjustmentRule {
        name: "stable keywords only",
        applies: |draft, cues, policy| {
            draft.open_for_fallback(policy) && cues.collapse.is_empty() && !cues.stable.is_empty()
        },
        outcome: (StabilityLabel::Stable, Reason::HasStable),
    },
    AdjustmentRule {
        name: "collapse and stable keywords",
        applies: |draft, cues, policy| {
            draft.open_for_fallback(policy) && !cues.collapse.is_empty() && !cues.stable.is_empty()
        },
        outcome: (StabilityLabel::Undetermined, Reason::HasBoth),
    },
];

/// Runs the full classification pipeline for single sentences.
#[derive(Debug, Clone)]
pub struct DecisionSynthesizer {
    lexicon: Arc<Lexicon>,
    filter: FalsePositiveFilter,
    scanner: CueScanner,
    resolver: DependencyNegationResolver,
    adjudicator: DoubleNegationAdjudicator,
    fallback: FallbackPolicy,
}

impl Default for DecisionSynthesizer {
    fn default() -> Self {
        Self::with_lexicon(Lexicon::shared_default())
    }
}

impl DecisionSynthesizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_lexicon(Arc::new(config.lexicon.clone())).fallback(config.fallback)
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            filter: FalsePositiveFilter::new(),
            scanner: CueScanner::new(Arc::clone(&lexicon)),
            resolver: DependencyNegationResolver::new(Arc::clone(&lexicon)),
            adjudicator: DoubleNegationAdjudicator::new(),
            fallback: FallbackPolicy::default(),
            lexicon,
        }
    }

    pub fn fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Label one sentence, or `None` when it is discarded or carries no
    /// collapse/stable cue.
    pub fn classify(&self, text: &str, edges: &[DependencyEdge]) -> Option<ClassificationResult> {
        self.analyze(text, edges).result()
    }

    pub fn analyze(&self, text: &str, edges: &[DependencyEdge]) -> SentenceAnalysis {
        if let Some(rule) = self.filter.first_match(text) {
            tracing::debug!(rule = rule.description(), "sentence discarded");
            return SentenceAnalysis::Discarded(rule);
        }

        let cues = self.scanner.scan(text);
        if !cues.has_stability_evidence() {
            return SentenceAnalysis::NoCues;
        }

        let (mut draft, evidence) = if cues.has_solvent() {
            let outcome = self
                .resolver
                .resolve(text, edges, &cues.collapse, &cues.stable);
            let (signal, reason) = if outcome.needs_adjudication() {
                let (label, reason) = self.adjudicator.adjudicate(&outcome.evidence);
                (Signal::Label(label), reason)
            } else {
                (outcome.signal, outcome.reason)
            };
            let draft = match signal {
                Signal::OffTopic => Draft {
                    label: StabilityLabel::Undetermined,
                    reason,
                    solvent_present: false,
                    tga_ambiguous: outcome.tga_ambiguous,
                },
                Signal::Label(label) => Draft {
                    label,
                    reason,
                    solvent_present: true,
                    tga_ambiguous: outcome.tga_ambiguous,
                },
            };
            (draft, outcome.evidence)
        } else {
            let draft = Draft {
                label: StabilityLabel::Undetermined,
                reason: Reason::NoSolvent,
                solvent_present: false,
                tga_ambiguous: is_tga_ambiguous(
                    &self.lexicon,
                    text,
                    &cues.collapse,
                    &cues.stable,
                ),
            };
            (draft, NegationEvidence::default())
        };

        if let Some(rule) = ADJUSTMENT_RULES
            .iter()
            .find(|rule| (rule.applies)(&draft, &cues, self.fallback))
        {
            let (label, reason) = rule.outcome;
            tracing::trace!(rule = rule.name, "adjustment applied");
            draft.label = label;
            draft.reason = reason;
        }

        let result = ClassificationResult {
            label: draft.label,
            reason: draft.reason,
            solvent_present: draft.solvent_present,
            stability_present: true,
        };
        tracing::debug!(
            label = result.label.code(),
            reason = result.reason.as_str(),
            solvent = result.solvent_present,
            "sentence classified"
        );

        SentenceAnalysis::Classified {
            cues,
            result,
            evidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_rules_are_exclusive_for_fallback() {
        let draft = Draft {
            label: StabilityLabel::Undetermined,
            reason: Reason::NoSolvent,
            solvent_present: false,
            tga_ambiguous: false,
        };
        let cues = CueMatch {
            collapse: vec!["collaps".into()],
            stable: vec![],
            solvent: vec![],
        };
        let fired: Vec<_> = ADJUSTMENT_RULES
            .iter()
            .filter(|rule| (rule.applies)(&draft, &cues, FallbackPolicy::NoSolventOnly))
            .map(|rule| rule.name)
            .collect();
        assert_eq!(fired, vec!["collapse keywords only"]);
    }

    #[test]
    fn test_default_reason_closed_under_no_solvent_policy() {
        let draft = Draft {
            label: StabilityLabel::Undetermined,
            reason: Reason::Default,
            solvent_present: true,
            tga_ambiguous: false,
        };
        assert!(!draft.open_for_fallback(FallbackPolicy::NoSolventOnly));
        assert!(draft.open_for_fallback(FallbackPolicy::Always));

        let fired = Draft {
            reason: Reason::LossConfound,
            ..draft
        };
        assert!(!fired.open_for_fallback(FallbackPolicy::Always));
    }

    #[test]
    fn test_discarded_and_no_cue_sentences_emit_nothing() {
        let engine = DecisionSynthesizer::default();
        assert_eq!(
            engine.analyze("The crystals were soaked in DMF and lost crystallinity.", &[]),
            SentenceAnalysis::Discarded(FalsePositiveRule::WaterContext)
        );
        assert_eq!(
            engine.analyze("The solvent was removed under vacuum.", &[]),
            SentenceAnalysis::NoCues
        );
        assert_eq!(engine.classify("The solvent was removed under vacuum.", &[]), None);
    }
}
