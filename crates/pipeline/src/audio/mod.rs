//! Local audio capture and playback
//!
//! WAV files are always supported. Microphone capture and speaker
//! playback need the `device` feature; without it those calls fail with
//! a capture or playback error, which the dialogue treats accordingly.

#[cfg(feature = "device")]
mod device;

use async_trait::async_trait;
use aurora_ivr_core::{AudioBuffer, AudioPlayer, AudioRecorder, AudioSource, Result};
use std::time::Duration;

use crate::PipelineError;

/// Capture and playback on the local machine
#[derive(Debug, Clone)]
pub struct LocalAudio {
    sample_rate: u32,
    channels: u16,
}

impl LocalAudio {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels: channels.max(1),
        }
    }

    /// Whether microphone and speaker support was compiled in
    pub fn has_device_support() -> bool {
        cfg!(feature = "device")
    }

    #[cfg(feature = "device")]
    async fn record_device(&self, duration: Duration) -> std::result::Result<AudioBuffer, PipelineError> {
        let (sample_rate, channels) = (self.sample_rate, self.channels);
        tokio::task::spawn_blocking(move || device::capture(duration, sample_rate, channels))
            .await
            .map_err(|e| PipelineError::Capture(format!("capture task failed: {}", e)))?
    }

    #[cfg(not(feature = "device"))]
    async fn record_device(&self, _duration: Duration) -> std::result::Result<AudioBuffer, PipelineError> {
        Err(PipelineError::Capture(
            "built without microphone support (enable the `device` feature)".to_string(),
        ))
    }

    #[cfg(feature = "device")]
    async fn play_device(&self, audio: AudioBuffer) -> std::result::Result<(), PipelineError> {
        tokio::task::spawn_blocking(move || device::play(&audio))
            .await
            .map_err(|e| PipelineError::Playback(format!("playback task failed: {}", e)))?
    }

    #[cfg(not(feature = "device"))]
    async fn play_device(&self, _audio: AudioBuffer) -> std::result::Result<(), PipelineError> {
        Err(PipelineError::Playback(
            "built without speaker support (enable the `device` feature)".to_string(),
        ))
    }
}

impl Default for LocalAudio {
    fn default() -> Self {
        Self::new(aurora_ivr_core::SPEECH_SAMPLE_RATE, 1)
    }
}

#[async_trait]
impl AudioRecorder for LocalAudio {
    async fn record(&self, source: &AudioSource) -> Result<AudioBuffer> {
        match source {
            AudioSource::Device { duration } => {
                tracing::info!(seconds = duration.as_secs_f32(), "Recording audio");
                let audio = self.record_device(*duration).await?;
                tracing::info!(samples = audio.samples.len(), "Recording finished");
                Ok(audio)
            }
            AudioSource::File(path) => {
                let path = path.clone();
                let audio = tokio::task::spawn_blocking(move || AudioBuffer::read_wav(path))
                    .await
                    .map_err(|e| PipelineError::Capture(format!("read task failed: {}", e)))??;
                Ok(audio)
            }
        }
    }
}

#[async_trait]
impl AudioPlayer for LocalAudio {
    async fn play(&self, audio: &AudioBuffer) -> Result<()> {
        if audio.is_empty() {
            return Ok(());
        }
        self.play_device(audio.clone()).await?;
        Ok(())
    }
}
