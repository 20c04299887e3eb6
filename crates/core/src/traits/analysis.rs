//! Text analysis traits: sentiment scoring and intent classification

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Scorer output before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSentiment {
    pub label: String,
    /// Confidence in [0, 1]
    pub score: f32,
}

/// Sentiment analysis interface
#[async_trait]
pub trait SentimentScorer: Send + Sync + 'static {
    async fn score(&self, text: &str) -> Result<RawSentiment>;

    fn model_name(&self) -> &str;
}

/// Raw label emitted by a text classifier (e.g. `LABEL_0`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassifierLabel(pub String);

impl ClassifierLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassifierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fallback text classifier interface
///
/// Receives the full classifier input (instruction prompt plus the
/// caller's utterance) and returns its top label. The label space belongs
/// to the model; mapping it onto intent categories is the resolver's job.
#[async_trait]
pub trait IntentClassifier: Send + Sync + 'static {
    async fn classify(&self, input: &str) -> Result<ClassifierLabel>;

    fn model_name(&self) -> &str;
}
