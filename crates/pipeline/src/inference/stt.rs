//! Speech recognition client

use async_trait::async_trait;
use aurora_ivr_core::{AudioBuffer, Error, Result, SpeechToText, SPEECH_SAMPLE_RATE};
use serde::Deserialize;

use super::InferenceClient;
use crate::ServiceKind;

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Posts 16 kHz mono WAV to a speech recognition model
pub struct HttpTranscriber {
    client: InferenceClient,
    model: String,
}

impl HttpTranscriber {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl SpeechToText for HttpTranscriber {
    async fn transcribe(&self, audio: &AudioBuffer) -> Result<String> {
        if audio.is_empty() {
            return Err(Error::EmptyTranscript);
        }

        let wav = audio.to_speech_format(SPEECH_SAMPLE_RATE)?.to_wav_bytes()?;
        let response: TranscriptionResponse = self
            .client
            .post_wav(ServiceKind::Transcription, &self.model, wav)
            .await?;

        let text = response.text.trim().to_string();
        if text.is_empty() {
            return Err(Error::EmptyTranscript);
        }

        tracing::debug!(model = %self.model, chars = text.len(), "Transcribed audio");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
