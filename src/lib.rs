#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]
//! Rule-based extraction of solvent-removal stability labels from
//! scientific sentences.
//!
//! ```
//! use layered_stability::{DecisionSynthesizer, DependencyEdge, Reason, StabilityLabel};
//!
//! let engine = DecisionSynthesizer::default();
//! let result = engine
//!     .classify(
//!         "After solvent removal the framework was not stable.",
//!         &[DependencyEdge::new("stable", "advmod", "not")],
//!     )
//!     .unwrap();
//! assert_eq!(result.label, StabilityLabel::Unstable);
//! assert_eq!(result.reason, Reason::NegatedStable);
//! ```

mod config;
mod cue_scanner;
mod decision;
mod double_negation;
mod error;
mod false_positive;
mod label;
mod lexicon;
mod negation;
mod sentence;

pub use config::EngineConfig;
pub use cue_scanner::{CueMatch, CueScanner};
pub use decision::{ClassificationResult, DecisionSynthesizer, FallbackPolicy, SentenceAnalysis};
pub use double_negation::DoubleNegationAdjudicator;
pub use error::{StabilityError, StabilityResult};
pub use false_positive::{
    air_phrase, miscue_phrase, organic_linker_phrase, water_phrase, FalsePositiveFilter,
    FalsePositiveRule,
};
pub use label::{Reason, Signal, StabilityLabel};
pub use lexicon::{CueCategory, Lexicon};
pub use negation::{
    is_tga_ambiguous, token_matches_cue, DependencyNegationResolver, NegationEvidence,
    NegationOutcome,
};
pub use sentence::{DependencyEdge, Sentence};
