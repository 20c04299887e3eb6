//! Collaborator handles
//!
//! Built once at startup and handed to the orchestrator. Tests swap in
//! fakes for any of them.

use aurora_ivr_core::{
    AudioPlayer, AudioRecorder, IntentClassifier, OperatorInput, SentimentScorer, SpeechToText,
    TextToSpeech, TranscriptLog,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AgentServices {
    pub stt: Arc<dyn SpeechToText>,
    pub tts: Arc<dyn TextToSpeech>,
    pub recorder: Arc<dyn AudioRecorder>,
    pub player: Arc<dyn AudioPlayer>,
    pub sentiment: Arc<dyn SentimentScorer>,
    pub classifier: Arc<dyn IntentClassifier>,
    pub transcript: Arc<dyn TranscriptLog>,
    pub input: Arc<dyn OperatorInput>,
}

impl std::fmt::Debug for AgentServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentServices")
            .field("stt", &self.stt.model_name())
            .field("tts", &self.tts.model_name())
            .field("sentiment", &self.sentiment.model_name())
            .field("classifier", &self.classifier.model_name())
            .finish_non_exhaustive()
    }
}
