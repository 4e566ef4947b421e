//! Dependency-edge negation resolution.
//!
//! Walks the dependency edges of one sentence in parser order and looks for:
//! - stability talk about another medium (water, air) or about the solvent
//!   molecule itself, which takes the sentence out of scope
//! - multistep thermal procedures that rule-based parsing cannot attribute
//! - "loss of ... molecules" phrasing that confounds solvent loss with collapse
//! - a negation word adjacent to a stable or collapse cue, which flips its polarity
//! - two negation words on one edge, deferred to the
//!   [`DoubleNegationAdjudicator`](crate::DoubleNegationAdjudicator)

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::label::{Reason, Signal, StabilityLabel};
use crate::lexicon::{CueCategory, Lexicon};
use crate::sentence::DependencyEdge;

const STABILITY_WORDS: &[&str] = &["stability", "stable"];
const MOLECULE_MEDIA: &[&str] = &["solvent", "guest"];
const SEQUENCE_WORDS: &[&str] = &["above", "at", "after"];
const LOSS_ROOTS: &[&str] = &["loss", "lose", "lost"];

/// Per-sentence accumulator filled during the edge walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationEvidence {
    /// Stable cues found negated
    pub checked_stability: BTreeSet<String>,
    /// Collapse cues found negated
    pub checked_collapse: BTreeSet<String>,
    /// Both tokens of every edge that contributed a negation, in walk order
    pub checked_tokens: Vec<String>,
    /// Two negation words appeared on one edge
    pub double_negative: bool,
}

impl NegationEvidence {
    /// Checked tokens carrying a "los" root (loss, lose, lost, losing).
    pub fn loss_token_count(&self) -> usize {
        self.checked_tokens
            .iter()
            .filter(|token| token.contains("los"))
            .count()
    }
}

/// Output of one edge walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationOutcome {
    pub signal: Signal,
    pub reason: Reason,
    pub evidence: NegationEvidence,
    /// The sentence mentions thermogravimetric context without a weight cue
    pub tga_ambiguous: bool,
}

impl NegationOutcome {
    /// The walk ended on a water, air, or solvent-molecule edge.
    pub fn is_short_circuit(&self) -> bool {
        self.signal == Signal::OffTopic
    }

    /// Double negation was seen and no short-circuit fired.
    pub fn needs_adjudication(&self) -> bool {
        self.evidence.double_negative && !self.is_short_circuit()
    }
}

fn is_one_of(word: &str, set: &[&str]) -> bool {
    set.contains(&word)
}

fn either_is(w1: &str, w2: &str, set: &[&str]) -> bool {
    is_one_of(w1, set) || is_one_of(w2, set)
}

fn either_contains(w1: &str, w2: &str, roots: &[&str]) -> bool {
    roots
        .iter()
        .any(|root| w1.contains(root) || w2.contains(root))
}

/// Whether `token` starts with one of `cues`. Cues are compared with
/// surrounding whitespace trimmed, so `" stable"` matches the token `stable`.
pub fn token_matches_cue(token: &str, cues: &[String]) -> bool {
    let token = token.trim();
    cues.iter().any(|cue| {
        let cue = cue.trim();
        !cue.is_empty() && token.starts_with(cue)
    })
}

fn cues_within<'a>(token: &'a str, cues: &'a [String]) -> impl Iterator<Item = String> + 'a {
    let token = token.trim();
    cues.iter()
        .filter(move |cue| {
            let cue = cue.trim();
            !cue.is_empty() && token.contains(cue)
        })
        .cloned()
}

/// Whether the sentence is thermogravimetric context that a weight cue does
/// not already disambiguate.
///
/// Any collapse or stable cue containing "weight" ("two-step weight", "one
/// weight") counts as that cue. A check for a cue equal to the bare word
/// "weight" would never fire against the built-in lexicon, which has none.
pub fn is_tga_ambiguous(lexicon: &Lexicon, text: &str, collapse: &[String], stable: &[String]) -> bool {
    lexicon.any_in(CueCategory::TgaContext, text)
        && !collapse
            .iter()
            .chain(stable.iter())
            .any(|cue| cue.contains("weight"))
}

/// Resolves negation scope over externally supplied dependency edges.
#[derive(Debug, Clone)]
pub struct DependencyNegationResolver {
    lexicon: Arc<Lexicon>,
}

impl Default for DependencyNegationResolver {
    fn default() -> Self {
        Self::new(Lexicon::shared_default())
    }
}

impl DependencyNegationResolver {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn resolve(
        &self,
        text: &str,
        edges: &[DependencyEdge],
        collapse: &[String],
        stable: &[String],
    ) -> NegationOutcome {
        let mut signal = Signal::default();
        let mut reason = Reason::Default;
        let mut evidence = NegationEvidence::default();
        let tga_ambiguous = is_tga_ambiguous(&self.lexicon, text, collapse, stable);

        for edge in edges {
            let (w1, w2) = match edge.words() {
                Some(words) => words,
                None => continue,
            };

            if either_is(w1, w2, STABILITY_WORDS) && either_is(w1, w2, &["water"]) {
                signal = Signal::OffTopic;
                reason = Reason::WaterStability;
                tracing::trace!(head = w1, dependent = w2, "water stability edge");
                break;
            } else if either_is(w1, w2, STABILITY_WORDS) && either_is(w1, w2, &["air"]) {
                signal = Signal::OffTopic;
                reason = Reason::AirStability;
                tracing::trace!(head = w1, dependent = w2, "air stability edge");
                break;
            } else if either_contains(w1, w2, &["degrad"]) && either_is(w1, w2, MOLECULE_MEDIA) {
                signal = Signal::OffTopic;
                reason = Reason::SolventMoleculeStability;
                tracing::trace!(head = w1, dependent = w2, "solvent molecule degradation edge");
                break;
            } else if either_contains(w1, w2, &["collaps"]) && either_is(w1, w2, SEQUENCE_WORDS) {
                signal = Signal::UNDETERMINED;
                reason = Reason::MultistepTga;
                tracing::trace!(head = w1, dependent = w2, "multistep procedure edge");
                break;
            } else if either_contains(w1, w2, LOSS_ROOTS) && either_contains(w1, w2, &["molecule"]) {
                signal = Signal::UNDETERMINED;
                reason = Reason::LossConfound;
                continue;
            }

            let negated_head = self.lexicon.is_negation(w1);
            let negated_dependent = self.lexicon.is_negation(w2);

            if negated_head != negated_dependent {
                if token_matches_cue(w1, stable) || token_matches_cue(w2, stable) {
                    signal = Signal::Label(StabilityLabel::Unstable);
                    reason = Reason::NegatedStable;
                    for word in [w1, w2] {
                        if token_matches_cue(word, stable) {
                            evidence.checked_stability.extend(cues_within(word, stable));
                        }
                    }
                    evidence.checked_tokens.push(w1.to_string());
                    evidence.checked_tokens.push(w2.to_string());
                    tracing::trace!(head = w1, dependent = w2, "negated stable cue");
                } else if stable.is_empty()
                    && (token_matches_cue(w1, collapse) || token_matches_cue(w2, collapse))
                {
                    signal = Signal::Label(StabilityLabel::Stable);
                    reason = Reason::NegatedCollapse;
                    for word in [w1, w2] {
                        if token_matches_cue(word, collapse) {
                            evidence.checked_collapse.extend(cues_within(word, collapse));
                        }
                    }
                    evidence.checked_tokens.push(w1.to_string());
                    evidence.checked_tokens.push(w2.to_string());
                    tracing::trace!(head = w1, dependent = w2, "negated collapse cue");
                }
            } else if negated_head && negated_dependent {
                evidence.double_negative = true;
            }
        }

        NegationOutcome {
            signal,
            reason,
            evidence,
            tga_ambiguous,
        }
    }
}
