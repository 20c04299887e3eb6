//! Confirmation loop
//!
//! One round asks whether the resolved intent is right, captures a single
//! reply and classifies it. Repeating after an ambiguous reply is the
//! orchestrator's call.

use aurora_ivr_config::{PromptsConfig, ReplyKeywords};
use aurora_ivr_core::{ConfirmationOutcome, IntentCategory, TurnId};
use aurora_ivr_text_processing::ReplyClassifier;

use crate::{AgentError, CallerChannel, CapturePurpose, InputMethod};

pub struct ConfirmationLoop {
    replies: ReplyClassifier,
    prompts: PromptsConfig,
}

impl ConfirmationLoop {
    pub fn new(prompts: &PromptsConfig, keywords: &ReplyKeywords) -> Self {
        Self {
            replies: ReplyClassifier::new(keywords),
            prompts: prompts.clone(),
        }
    }

    /// The yes/no question for `intent`
    pub fn question_for(&self, intent: IntentCategory) -> String {
        self.prompts.confirmation_for(intent)
    }

    /// Ask about `intent` and classify the reply
    pub async fn confirm(
        &self,
        channel: &CallerChannel,
        method: InputMethod,
        turn_id: TurnId,
        intent: IntentCategory,
    ) -> Result<ConfirmationOutcome, AgentError> {
        channel.say(&self.question_for(intent)).await;
        self.listen(channel, method, turn_id).await
    }

    /// Capture and classify one more reply without repeating the question
    pub async fn listen(
        &self,
        channel: &CallerChannel,
        method: InputMethod,
        turn_id: TurnId,
    ) -> Result<ConfirmationOutcome, AgentError> {
        let audio = channel
            .capture(method, CapturePurpose::ConfirmationReply)
            .await?;
        let reply = channel.transcribe(&audio, turn_id).await?;
        let outcome = self.interpret(reply.text());
        tracing::info!(turn_id = %turn_id, outcome = %outcome, "Confirmation reply");
        Ok(outcome)
    }

    pub fn interpret(&self, reply: &str) -> ConfirmationOutcome {
        self.replies.classify(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_names_intent() {
        let confirmation =
            ConfirmationLoop::new(&PromptsConfig::default(), &ReplyKeywords::default());
        assert_eq!(
            confirmation.question_for(IntentCategory::FlightStatus),
            "Did you mean to inquire about flight status? Please respond with yes or no."
        );
    }

    #[test]
    fn test_interpret() {
        let confirmation =
            ConfirmationLoop::new(&PromptsConfig::default(), &ReplyKeywords::default());
        assert_eq!(confirmation.interpret("yes"), ConfirmationOutcome::Affirmative);
        assert_eq!(confirmation.interpret("nope"), ConfirmationOutcome::Negative);
        assert_eq!(
            confirmation.interpret("maybe, not sure"),
            ConfirmationOutcome::Ambiguous
        );
    }
}
