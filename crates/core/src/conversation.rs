//! Conversation types: utterances, sentiment, confirmation and turns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intent::IntentCategory;
use crate::{Error, Result};

/// Identifier shared by everything captured during one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transcribed caller speech. Created once per recording, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    text: String,
    turn_id: TurnId,
}

impl Utterance {
    /// Build an utterance from transcriber output
    ///
    /// Whitespace-only text is rejected so that an empty transcript can
    /// never reach sentiment analysis or intent resolution.
    pub fn new(text: impl Into<String>, turn_id: TurnId) -> Result<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyTranscript);
        }
        Ok(Self {
            text: trimmed.to_string(),
            turn_id,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn turn_id(&self) -> TurnId {
        self.turn_id
    }
}

/// Map a raw [0, 1] confidence onto [-1, 1]
pub fn compound_score(raw_score: f32) -> f32 {
    (raw_score - 0.5) * 2.0
}

/// Normalized sentiment for an utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Label reported by the scorer (e.g. `POSITIVE`, `NEGATIVE`)
    pub label: String,
    /// Scorer confidence in [0, 1]
    pub raw_score: f32,
    /// `(raw_score - 0.5) * 2`, in [-1, 1]
    pub compound_score: f32,
}

impl SentimentResult {
    pub fn from_raw(label: impl Into<String>, raw_score: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&raw_score) {
            return Err(Error::InvalidScore(raw_score));
        }
        Ok(Self {
            label: label.into(),
            raw_score,
            compound_score: compound_score(raw_score),
        })
    }
}

/// Tri-state result of asking the caller to validate an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationOutcome {
    Affirmative,
    Negative,
    Ambiguous,
}

impl ConfirmationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affirmative => "affirmative",
            Self::Negative => "negative",
            Self::Ambiguous => "ambiguous",
        }
    }
}

impl std::fmt::Display for ConfirmationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the orchestrator learned during one exchange
///
/// Lives only for the duration of the turn. Fields are filled in as the
/// state machine advances; a field left `None` was never reached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub turn_id: TurnId,
    pub utterance_text: Option<String>,
    pub sentiment: Option<SentimentResult>,
    pub resolved_intent: Option<IntentCategory>,
    pub confirmation_outcome: Option<ConfirmationOutcome>,
}

impl ConversationTurn {
    pub fn new(turn_id: TurnId) -> Self {
        Self {
            turn_id,
            ..Default::default()
        }
    }

    /// A response may only be delivered for a confirmed, actionable intent
    pub fn may_act(&self) -> bool {
        matches!(
            (self.resolved_intent, self.confirmation_outcome),
            (Some(intent), Some(ConfirmationOutcome::Affirmative)) if !intent.is_unknown()
        )
    }
}

/// Speaker of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// The caller
    User,
    /// The assistant
    System,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::System => "system",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the conversation transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: TurnRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(TurnRole::System, text)
    }
}
