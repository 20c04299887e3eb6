//! Fallback classifier source

use async_trait::async_trait;
use aurora_ivr_config::{LabelMap, LabelTarget, PromptsConfig};
use aurora_ivr_core::IntentClassifier;
use std::sync::Arc;

use super::{IntentMatch, IntentSource};

/// Asks the external classifier and translates its label through a [`LabelMap`]
///
/// The classifier receives `"{prompt}\n\nUser: {utterance}"`. The
/// no-intent label and labels absent from the map both decline the match,
/// which leaves the utterance `unknown`.
pub struct ClassifierFallback {
    classifier: Arc<dyn IntentClassifier>,
    labels: LabelMap,
    prompts: PromptsConfig,
}

impl ClassifierFallback {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        labels: LabelMap,
        prompts: PromptsConfig,
    ) -> Self {
        Self {
            classifier,
            labels,
            prompts,
        }
    }
}

#[async_trait]
impl IntentSource for ClassifierFallback {
    fn name(&self) -> &str {
        "classifier"
    }

    async fn match_intent(&self, utterance: &str) -> aurora_ivr_core::Result<IntentMatch> {
        let label = self
            .classifier
            .classify(&self.prompts.classifier_input(utterance))
            .await?;

        let outcome = match self.labels.lookup(&label) {
            Some(LabelTarget::Category(category)) => IntentMatch::Matched(category),
            Some(LabelTarget::NoIntent) => IntentMatch::NoMatch,
            None => {
                tracing::warn!(
                    model = self.classifier.model_name(),
                    label = %label,
                    "Classifier returned an unmapped label, treating as unknown"
                );
                IntentMatch::NoMatch
            }
        };

        tracing::debug!(label = %label, outcome = ?outcome, "Classifier fallback");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_ivr_core::{ClassifierLabel, Error, IntentCategory, Result};
    use parking_lot::Mutex;

    struct ScriptedClassifier {
        label: String,
        inputs: Mutex<Vec<String>>,
    }

    impl ScriptedClassifier {
        fn new(label: &str) -> Self {
            Self {
                label: label.to_string(),
                inputs: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IntentClassifier for ScriptedClassifier {
        async fn classify(&self, input: &str) -> Result<ClassifierLabel> {
            self.inputs.lock().push(input.to_string());
            Ok(ClassifierLabel::new(self.label.clone()))
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    struct DownClassifier;

    #[async_trait]
    impl IntentClassifier for DownClassifier {
        async fn classify(&self, _input: &str) -> Result<ClassifierLabel> {
            Err(Error::Classifier("model loading".to_string()))
        }

        fn model_name(&self) -> &str {
            "down"
        }
    }

    fn fallback(classifier: Arc<dyn IntentClassifier>) -> ClassifierFallback {
        let prompts = PromptsConfig {
            classifier_prompt: "Pick a topic.".to_string(),
            ..Default::default()
        };
        ClassifierFallback::new(classifier, LabelMap::default(), prompts)
    }

    #[tokio::test]
    async fn test_no_intent_label_declines() {
        let source = fallback(Arc::new(ScriptedClassifier::new("LABEL_0")));
        assert_eq!(
            source.match_intent("asdkjasnd nonsense query").await.unwrap(),
            IntentMatch::NoMatch
        );
    }

    #[tokio::test]
    async fn test_category_label_matches() {
        let source = fallback(Arc::new(ScriptedClassifier::new("Baggage_Information")));
        assert_eq!(
            source.match_intent("my suitcase is huge").await.unwrap(),
            IntentMatch::Matched(IntentCategory::BaggageInformation)
        );
    }

    #[tokio::test]
    async fn test_unmapped_label_declines() {
        let source = fallback(Arc::new(ScriptedClassifier::new("LABEL_7")));
        assert_eq!(
            source.match_intent("hmm").await.unwrap(),
            IntentMatch::NoMatch
        );
    }

    #[tokio::test]
    async fn test_prompt_precedes_utterance() {
        let classifier = Arc::new(ScriptedClassifier::new("LABEL_0"));
        let source = fallback(classifier.clone());
        source.match_intent("hello there").await.unwrap();

        let inputs = classifier.inputs.lock();
        assert_eq!(inputs.as_slice(), ["Pick a topic.\n\nUser: hello there"]);
    }

    #[tokio::test]
    async fn test_classifier_failure_propagates() {
        let source = fallback(Arc::new(DownClassifier));
        let err = source.match_intent("hello").await.unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));
    }
}
