//! Tie-break for two negation words on one dependency edge.

use crate::label::{Reason, StabilityLabel};
use crate::negation::NegationEvidence;

/// Decides polarity once a double negative has been seen.
///
/// "without loss of crystallinity" negates a negation, so a recorded stable
/// cue flips back to stable. When more than one checked token carries a
/// "los" root, the loss words are read as the claim itself and the single
/// remaining negation wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleNegationAdjudicator;

impl DoubleNegationAdjudicator {
    pub fn new() -> Self {
        Self
    }

    pub fn adjudicate(&self, evidence: &NegationEvidence) -> (StabilityLabel, Reason) {
        let repeated_loss = evidence.loss_token_count() > 1;

        let decision = if !evidence.checked_stability.is_empty() {
            if repeated_loss {
                (StabilityLabel::Unstable, Reason::TwoLossWithStable)
            } else {
                (StabilityLabel::Stable, Reason::DoubleNegationStable)
            }
        } else if !evidence.checked_collapse.is_empty() {
            if repeated_loss {
                (StabilityLabel::Stable, Reason::TwoLossWithCollapse)
            } else {
                (StabilityLabel::Unstable, Reason::DoubleNegationCollapse)
            }
        } else {
            (StabilityLabel::Undetermined, Reason::UnclearDoubleNegative)
        };

        tracing::trace!(
            label = decision.0.code(),
            reason = decision.1.as_str(),
            "double negative adjudicated"
        );
        decision
    }
}
