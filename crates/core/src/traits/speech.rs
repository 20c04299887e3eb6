//! Speech processing traits

use async_trait::async_trait;

use crate::{AudioBuffer, Result, VoiceConfig};

/// Speech-to-Text interface
///
/// # Example
///
/// ```ignore
/// let stt: Arc<dyn SpeechToText> = Arc::new(HttpTranscriber::new(config)?);
/// let text = stt.transcribe(&buffer).await?;
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribe a complete recording
    ///
    /// Implementations may return an empty string when nothing was
    /// recognized; callers must guard against that before using the text.
    async fn transcribe(&self, audio: &AudioBuffer) -> Result<String>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

/// Text-to-Speech interface
///
/// Treated as fire-and-forget by the orchestrator: a failure is logged and
/// the conversation continues.
#[async_trait]
pub trait TextToSpeech: Send + Sync + 'static {
    /// Speak `text`, returning once playback has finished
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<()>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}
