//! Sentiment scoring client

use async_trait::async_trait;
use aurora_ivr_core::{Error, RawSentiment, Result, SentimentScorer};

use super::{ClassificationResponse, InferenceClient, LabelScore};
use crate::ServiceKind;

/// Sentiment model client
///
/// Reports the top label, and as the score the probability that the text
/// is positive, so 0.0 is certainly negative and 1.0 certainly positive.
pub struct HttpSentimentScorer {
    client: InferenceClient,
    model: String,
}

impl HttpSentimentScorer {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

fn is_negative_label(label: &str) -> bool {
    matches!(label.to_ascii_lowercase().as_str(), "negative" | "neg" | "label_0")
}

/// Collapse ranked scores to (top label, positive probability)
fn positivity(ranked: &[LabelScore]) -> Option<RawSentiment> {
    let top = ranked.first()?;
    let score = if is_negative_label(&top.label) {
        1.0 - top.score
    } else {
        top.score
    };
    Some(RawSentiment {
        label: top.label.clone(),
        score: score.clamp(0.0, 1.0),
    })
}

#[async_trait]
impl SentimentScorer for HttpSentimentScorer {
    async fn score(&self, text: &str) -> Result<RawSentiment> {
        let response: ClassificationResponse = self
            .client
            .post_inputs(ServiceKind::Sentiment, &self.model, text)
            .await?;

        positivity(&response.into_ranked())
            .ok_or_else(|| Error::Sentiment("model returned no labels".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, score: f32) -> LabelScore {
        LabelScore {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_confident_negative_is_low() {
        let raw = positivity(&[score("NEGATIVE", 0.9), score("POSITIVE", 0.1)]).unwrap();
        assert_eq!(raw.label, "NEGATIVE");
        assert!((raw.score - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_confident_positive_is_high() {
        let raw = positivity(&[score("POSITIVE", 0.95)]).unwrap();
        assert!((raw.score - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_no_labels() {
        assert!(positivity(&[]).is_none());
    }
}
