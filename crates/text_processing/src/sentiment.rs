//! Sentiment gate
//!
//! Wraps the sentiment scorer and decides whether the caller should be
//! handed to a human before any intent work happens.

use aurora_ivr_config::constants::sentiment::ESCALATION_THRESHOLD;
use aurora_ivr_core::{Result, SentimentResult, SentimentScorer};
use std::sync::Arc;

/// Gate decision for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentDecision {
    Escalate,
    Continue,
}

/// Converts scorer output into a [`SentimentResult`] and an escalation decision
pub struct SentimentGate {
    scorer: Arc<dyn SentimentScorer>,
}

impl SentimentGate {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    /// Score `text` and derive the compound score
    ///
    /// `text` must be a non-empty transcript; callers guard this with
    /// [`aurora_ivr_core::Utterance`].
    pub async fn evaluate(&self, text: &str) -> Result<SentimentResult> {
        let raw = self.scorer.score(text).await?;
        let result = SentimentResult::from_raw(raw.label, raw.score)?;

        tracing::info!(
            model = self.scorer.model_name(),
            label = %result.label,
            raw_score = result.raw_score,
            compound_score = result.compound_score,
            "Sentiment evaluated"
        );

        Ok(result)
    }

    /// Compound score strictly below the threshold escalates
    pub fn should_escalate(result: &SentimentResult) -> bool {
        result.compound_score < ESCALATION_THRESHOLD
    }

    pub fn decide(result: &SentimentResult) -> SentimentDecision {
        if Self::should_escalate(result) {
            SentimentDecision::Escalate
        } else {
            SentimentDecision::Continue
        }
    }
}
