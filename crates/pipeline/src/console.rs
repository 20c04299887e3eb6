//! Console speech

use async_trait::async_trait;
use aurora_ivr_core::{Result, TextToSpeech, VoiceConfig};
use std::sync::Arc;

/// Prints every system utterance, then hands it to an optional voice
pub struct ConsoleSpeech {
    voice: Option<Arc<dyn TextToSpeech>>,
}

impl ConsoleSpeech {
    /// Print only
    pub fn new() -> Self {
        Self { voice: None }
    }

    /// Print, then speak through `voice`
    pub fn with_voice(voice: Arc<dyn TextToSpeech>) -> Self {
        Self { voice: Some(voice) }
    }
}

impl Default for ConsoleSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextToSpeech for ConsoleSpeech {
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<()> {
        println!("{}", text);
        match &self.voice {
            Some(inner) => inner.speak(text, voice).await,
            None => Ok(()),
        }
    }

    fn model_name(&self) -> &str {
        match &self.voice {
            Some(inner) => inner.model_name(),
            None => "console",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    #[async_trait]
    impl TextToSpeech for Recording {
        async fn speak(&self, text: &str, _voice: &VoiceConfig) -> Result<()> {
            self.0.lock().push(text.to_string());
            Ok(())
        }

        fn model_name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_delegates_to_voice() {
        let inner = Arc::new(Recording::default());
        let speech = ConsoleSpeech::with_voice(inner.clone());
        speech.speak("Hello!", &VoiceConfig::default()).await.unwrap();
        assert_eq!(inner.0.lock().as_slice(), ["Hello!".to_string()]);
        assert_eq!(speech.model_name(), "recording");
    }

    #[tokio::test]
    async fn test_print_only() {
        let speech = ConsoleSpeech::new();
        assert!(speech.speak("Hi", &VoiceConfig::default()).await.is_ok());
        assert_eq!(speech.model_name(), "console");
    }
}
