//! Fallback intent classifier client

use async_trait::async_trait;
use aurora_ivr_core::{ClassifierLabel, Error, IntentClassifier, Result};

use super::{ClassificationResponse, InferenceClient};
use crate::ServiceKind;

/// Text classification model returning its own label space (`LABEL_0`, ...)
pub struct HttpIntentClassifier {
    client: InferenceClient,
    model: String,
}

impl HttpIntentClassifier {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl IntentClassifier for HttpIntentClassifier {
    async fn classify(&self, input: &str) -> Result<ClassifierLabel> {
        let response: ClassificationResponse = self
            .client
            .post_inputs(ServiceKind::Classifier, &self.model, input)
            .await?;

        let top = response
            .into_ranked()
            .into_iter()
            .next()
            .ok_or_else(|| Error::Classifier("model returned no labels".to_string()))?;

        tracing::debug!(model = %self.model, label = %top.label, score = top.score, "Classified");
        Ok(ClassifierLabel::new(top.label))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
