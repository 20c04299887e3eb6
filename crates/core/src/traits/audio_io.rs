//! Audio capture and playback traits
//!
//! Capture and playback use the same physical device class and must not
//! overlap; the orchestrator awaits each call before issuing the next.

use async_trait::async_trait;

use crate::{AudioBuffer, AudioSource, Result};

/// Audio capture interface
#[async_trait]
pub trait AudioRecorder: Send + Sync + 'static {
    /// Capture audio from `source`
    ///
    /// Device sources block for the requested duration; file sources read
    /// the WAV file and fail with `Error::AudioCapture` if it is unreadable.
    async fn record(&self, source: &AudioSource) -> Result<AudioBuffer>;
}

/// Audio playback interface
#[async_trait]
pub trait AudioPlayer: Send + Sync + 'static {
    /// Play `audio`, returning when playback completes
    async fn play(&self, audio: &AudioBuffer) -> Result<()>;
}
