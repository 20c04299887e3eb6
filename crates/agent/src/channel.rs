//! The caller-facing side of the dialogue
//!
//! Everything said to the caller is spoken and logged; everything heard
//! is captured, saved to a working WAV, transcribed and logged.

use aurora_ivr_config::{AudioSettings, PromptsConfig};
use aurora_ivr_core::{
    AudioBuffer, AudioSource, Result, TranscriptEntry, TurnId, Utterance, VoiceConfig,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{AgentServices, InputMethod};

/// What a capture is for; selects the working file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePurpose {
    Query,
    ConfirmationReply,
}

/// Capture parameters
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    pub record_duration: Duration,
    pub sample_rate: u32,
    pub query_wav: PathBuf,
    pub response_wav: PathBuf,
}

impl CaptureSettings {
    fn working_file(&self, purpose: CapturePurpose) -> &PathBuf {
        match purpose {
            CapturePurpose::Query => &self.query_wav,
            CapturePurpose::ConfirmationReply => &self.response_wav,
        }
    }
}

impl From<&AudioSettings> for CaptureSettings {
    fn from(audio: &AudioSettings) -> Self {
        Self {
            record_duration: audio.record_duration(),
            sample_rate: audio.sample_rate,
            query_wav: PathBuf::from(&audio.query_wav_path),
            response_wav: PathBuf::from(&audio.response_wav_path),
        }
    }
}

pub struct CallerChannel {
    services: AgentServices,
    voice: VoiceConfig,
    capture: CaptureSettings,
    file_path_request: String,
}

impl CallerChannel {
    pub fn new(
        services: AgentServices,
        voice: VoiceConfig,
        capture: CaptureSettings,
        prompts: &PromptsConfig,
    ) -> Self {
        Self {
            services,
            voice,
            capture,
            file_path_request: prompts.file_path_request.clone(),
        }
    }

    /// Speak to the caller and log it
    ///
    /// Synthesis and logging failures are reported but never end the turn.
    pub async fn say(&self, text: &str) {
        if let Err(e) = self.services.tts.speak(text, &self.voice).await {
            tracing::warn!(error = %e, "Speech synthesis failed");
        }
        self.log(TranscriptEntry::system(text)).await;
    }

    /// Ask the operator console for one line
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        self.services.input.read_line(prompt).await
    }

    /// Capture audio by the chosen method and save the working copy
    pub async fn capture(&self, method: InputMethod, purpose: CapturePurpose) -> Result<AudioBuffer> {
        let source = match method {
            InputMethod::Record => AudioSource::Device {
                duration: self.capture.record_duration,
            },
            InputMethod::File => {
                self.say(&self.file_path_request).await;
                let path = self.ask("File: ").await?;
                AudioSource::File(PathBuf::from(path))
            }
        };

        let audio = self
            .services
            .recorder
            .record(&source)
            .await?
            .to_speech_format(self.capture.sample_rate)?;

        self.save_working_copy(&audio, self.capture.working_file(purpose).clone())
            .await;
        Ok(audio)
    }

    /// Transcribe captured audio into a non-empty utterance and log it
    pub async fn transcribe(&self, audio: &AudioBuffer, turn_id: TurnId) -> Result<Utterance> {
        let text = self.services.stt.transcribe(audio).await?;
        let utterance = Utterance::new(text, turn_id)?;
        tracing::info!(turn_id = %turn_id, transcript = utterance.text(), "Transcript");
        self.log(TranscriptEntry::user(utterance.text())).await;
        Ok(utterance)
    }

    /// Play a cue file; a missing or unplayable file is skipped
    pub async fn play_cue(&self, path: &Path) {
        let owned = path.to_path_buf();
        let loaded = tokio::task::spawn_blocking(move || AudioBuffer::read_wav(owned)).await;
        let audio = match loaded {
            Ok(Ok(audio)) => audio,
            Ok(Err(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "Cue not playable, skipping");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cue load task failed");
                return;
            }
        };
        if let Err(e) = self.services.player.play(&audio).await {
            tracing::warn!(path = %path.display(), error = %e, "Cue playback failed");
        }
    }

    async fn save_working_copy(&self, audio: &AudioBuffer, path: PathBuf) {
        let audio = audio.clone();
        let shown = path.display().to_string();
        match tokio::task::spawn_blocking(move || audio.write_wav(path)).await {
            Ok(Ok(())) => tracing::debug!(path = %shown, "Saved working audio"),
            Ok(Err(e)) => tracing::warn!(path = %shown, error = %e, "Failed to save working audio"),
            Err(e) => tracing::warn!(error = %e, "Working audio task failed"),
        }
    }

    async fn log(&self, entry: TranscriptEntry) {
        if let Err(e) = self.services.transcript.append(&entry).await {
            tracing::warn!(error = %e, "Transcript log write failed");
        }
    }
}
