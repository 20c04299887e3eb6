//! Spoken prompts and the classifier instruction prompt

use aurora_ivr_core::IntentCategory;
use serde::{Deserialize, Serialize};

/// Everything the assistant says, plus the fallback classifier prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Speaker name used in the transcript log
    pub agent_name: String,
    pub greeting: String,
    pub input_method_question: String,
    pub invalid_input_method: String,
    pub file_path_request: String,
    /// `{intent}` is replaced with the spoken category name
    pub confirmation_question: String,
    pub clarification: String,
    /// Unknown intent, negative confirmation, service failure
    pub irrelevant_escalation: String,
    pub sentiment_escalation: String,
    pub handoff: String,
    pub capture_failure: String,
    /// Instruction text prepended to the utterance for the fallback classifier
    pub classifier_prompt: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            agent_name: "Aurora Airlines".to_string(),
            greeting: "Hello! Welcome to Aurora Airline's Intelligent Virtual Assistant. How can we assist you today?".to_string(),
            input_method_question: "Do you want to record audio from the device or provide an audio file? Type 'record' to record audio or 'file' to provide an audio file.".to_string(),
            invalid_input_method: "Invalid choice. Please type 'record' or 'file'.".to_string(),
            file_path_request: "Please provide the path to the audio file. Please use a .WAV file".to_string(),
            confirmation_question: "Did you mean to inquire about {intent}? Please respond with yes or no.".to_string(),
            clarification: "I'm sorry, I didn't understand your response. Can you please confirm with yes or no?".to_string(),
            irrelevant_escalation: "Sorry to hear that. Let me connect you to an agent for further assistance.".to_string(),
            sentiment_escalation: "I'm sorry to hear that you're upset. Let me transfer you to our customer support team.".to_string(),
            handoff: "Please Wait while we connect you to an agent! Thank you for choosing Aurora Airlines!".to_string(),
            capture_failure: "I'm sorry, I couldn't hear your request. Please call again.".to_string(),
            classifier_prompt: DEFAULT_CLASSIFIER_PROMPT.to_string(),
        }
    }
}

impl PromptsConfig {
    /// Yes/no question for a candidate intent
    pub fn confirmation_for(&self, intent: IntentCategory) -> String {
        self.confirmation_question
            .replace("{intent}", intent.spoken_name())
    }

    /// Classifier input: instruction prompt, blank line, then the caller's words
    pub fn classifier_input(&self, utterance: &str) -> String {
        format!("{}\n\nUser: {}", self.classifier_prompt, utterance)
    }
}

const DEFAULT_CLASSIFIER_PROMPT: &str = r#"
Welcome to Aurora Airlines customer service! How can we assist you today?

1. Booking a Flight: Example queries - "I need to book a flight for next week", "Can you help me reserve a seat on a flight to Paris?"
2. Flight Status: Example queries - "What's the status of my flight to New York?", "Is my flight delayed?", "Will my flight be cancelled", "When is the arrival or departure of the flight"
3. General Information: Example queries - "What are your pet policies?", "Do you offer in flight meals?", "Tell me about your airline's policy"
4. Frequent Flyer Program: Example queries - "How can I enroll in your frequent flyer program?", "What are the benefits of being a frequent flyer?", "How much reward can I score?"
5. Baggage Information: Example queries - "What's the baggage allowance for my flight?", "Are there any restrictions on carry-on luggage?"

Please provide your query, and we'll do our best to assist you!
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_question() {
        let prompts = PromptsConfig::default();
        assert_eq!(
            prompts.confirmation_for(IntentCategory::FlightStatus),
            "Did you mean to inquire about flight status? Please respond with yes or no."
        );
    }

    #[test]
    fn test_classifier_input_layout() {
        let prompts = PromptsConfig {
            classifier_prompt: "Pick a topic.".to_string(),
            ..Default::default()
        };
        assert_eq!(
            prompts.classifier_input("where is my bag"),
            "Pick a topic.\n\nUser: where is my bag"
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let prompts: PromptsConfig = serde_yaml::from_str("agent_name: Aurora Air\n").unwrap();
        assert_eq!(prompts.agent_name, "Aurora Air");
        assert!(prompts.greeting.starts_with("Hello!"));
    }
}
