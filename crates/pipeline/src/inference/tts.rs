//! Speech synthesis client

use async_trait::async_trait;
use aurora_ivr_core::{AudioBuffer, AudioPlayer, Result, TextToSpeech, VoiceConfig};
use std::sync::Arc;

use super::InferenceClient;
use crate::ServiceKind;

/// Synthesizes through a text-to-speech model and plays the result
///
/// Volume is applied as gain. The speaking rate is fixed by the model.
pub struct HttpSynthesizer {
    client: InferenceClient,
    model: String,
    player: Arc<dyn AudioPlayer>,
}

impl HttpSynthesizer {
    pub fn new(
        client: InferenceClient,
        model: impl Into<String>,
        player: Arc<dyn AudioPlayer>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            player,
        }
    }
}

#[async_trait]
impl TextToSpeech for HttpSynthesizer {
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<()> {
        let bytes = self
            .client
            .post_inputs_for_audio(ServiceKind::Synthesis, &self.model, text)
            .await?;
        let audio = AudioBuffer::from_wav_bytes(&bytes)
            .map_err(|e| aurora_ivr_core::Error::Synthesis(e.to_string()))?;

        tracing::debug!(
            model = %self.model,
            duration_ms = audio.duration().as_millis() as u64,
            rate = voice.rate,
            "Synthesized speech"
        );
        self.player.play(&audio.with_gain(voice.volume)).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
