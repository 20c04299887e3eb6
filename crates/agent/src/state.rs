//! Dialogue states, turn outcomes and events

use aurora_ivr_core::IntentCategory;
use serde::Serialize;

/// States of one conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    Greeting,
    AwaitInputMethod,
    CaptureAudio,
    Transcribe,
    SentimentCheck,
    ResolveIntent,
    Confirm,
    Clarify,
    Act,
    Escalate,
    Closure,
}

impl DialogueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::AwaitInputMethod => "await_input_method",
            Self::CaptureAudio => "capture_audio",
            Self::Transcribe => "transcribe",
            Self::SentimentCheck => "sentiment_check",
            Self::ResolveIntent => "resolve_intent",
            Self::Confirm => "confirm",
            Self::Clarify => "clarify",
            Self::Act => "act",
            Self::Escalate => "escalate",
            Self::Closure => "closure",
        }
    }
}

impl std::fmt::Display for DialogueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered record of the states a turn passed through
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DialogueTrace {
    states: Vec<DialogueState>,
}

impl DialogueTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: DialogueState) {
        self.states.push(state);
    }

    pub fn states(&self) -> &[DialogueState] {
        &self.states
    }

    pub fn current(&self) -> Option<DialogueState> {
        self.states.last().copied()
    }

    pub fn visited(&self, state: DialogueState) -> bool {
        self.states.contains(&state)
    }

    /// How many times `state` was entered
    pub fn count(&self, state: DialogueState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }
}

/// Why a turn was handed to a human
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationReason {
    NegativeSentiment,
    UnknownIntent,
    NegativeConfirmation,
    ConfirmationExhausted,
    InputMethodExhausted,
    ServiceUnavailable,
}

impl EscalationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NegativeSentiment => "negative_sentiment",
            Self::UnknownIntent => "unknown_intent",
            Self::NegativeConfirmation => "negative_confirmation",
            Self::ConfirmationExhausted => "confirmation_exhausted",
            Self::InputMethodExhausted => "input_method_exhausted",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl std::fmt::Display for EscalationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a turn ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Confirmed intent, canned reply delivered
    Acted {
        intent: IntentCategory,
        response: String,
    },
    Escalated {
        reason: EscalationReason,
    },
    /// Confirmation stayed ambiguous and escalation is disabled
    Unresolved {
        intent: IntentCategory,
    },
    /// Caller audio unusable or operator input closed
    Aborted {
        reason: String,
    },
}

impl TurnOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Acted { .. } => "acted",
            Self::Escalated { .. } => "escalated",
            Self::Unresolved { .. } => "unresolved",
            Self::Aborted { .. } => "aborted",
        }
    }

    /// The turn reached a defined end (acted, escalated, unresolved)
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Aborted { .. })
    }

    pub fn escalation_reason(&self) -> Option<EscalationReason> {
        match self {
            Self::Escalated { reason } => Some(*reason),
            _ => None,
        }
    }
}

/// Broadcast while a turn runs
#[derive(Debug, Clone)]
pub enum DialogueEvent {
    StateChanged {
        from: Option<DialogueState>,
        to: DialogueState,
    },
    TurnEnded {
        outcome: TurnOutcome,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace() {
        let mut trace = DialogueTrace::new();
        trace.push(DialogueState::Greeting);
        trace.push(DialogueState::Confirm);
        trace.push(DialogueState::Clarify);
        trace.push(DialogueState::Confirm);

        assert_eq!(trace.current(), Some(DialogueState::Confirm));
        assert_eq!(trace.count(DialogueState::Confirm), 2);
        assert!(!trace.visited(DialogueState::Act));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = TurnOutcome::Escalated {
            reason: EscalationReason::NegativeSentiment,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "escalated");
        assert_eq!(json["reason"], "negative_sentiment");
        assert!(outcome.is_handled());

        let aborted = TurnOutcome::Aborted {
            reason: "no transcript".to_string(),
        };
        assert!(!aborted.is_handled());
        assert_eq!(aborted.kind(), "aborted");
    }
}
