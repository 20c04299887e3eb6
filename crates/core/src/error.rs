//! Error types shared by every crate in the workspace

use thiserror::Error;

/// Result alias used by collaborator traits
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
///
/// Collaborator adapters convert their own errors into this type so the
/// orchestrator can apply one failure policy per category.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transcription failed: {0}")]
    Transcription(String),

    /// The transcriber returned, but produced no usable text
    #[error("Transcription produced no text")]
    EmptyTranscript,

    #[error("Audio capture failed: {0}")]
    AudioCapture(String),

    #[error("Audio playback failed: {0}")]
    AudioPlayback(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Sentiment analysis failed: {0}")]
    Sentiment(String),

    #[error("Intent classifier failed: {0}")]
    Classifier(String),

    #[error("Service unavailable: {service}: {message}")]
    ServiceUnavailable { service: String, message: String },

    #[error("Score {0} outside [0, 1]")]
    InvalidScore(f32),

    #[error("Operator input error: {0}")]
    Input(String),

    #[error("Transcript log error: {0}")]
    Log(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `ServiceUnavailable` error
    pub fn unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
            message: message.into(),
        }
    }

    /// True when the caller's audio could not be turned into text
    pub fn is_capture_failure(&self) -> bool {
        matches!(
            self,
            Self::Transcription(_) | Self::EmptyTranscript | Self::AudioCapture(_)
        )
    }

    /// True when an analysis backend (sentiment or classifier) failed
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::Sentiment(_)
                | Self::Classifier(_)
                | Self::ServiceUnavailable { .. }
                | Self::InvalidScore(_)
        )
    }
}

impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => Error::Io(e),
            other => Error::AudioCapture(other.to_string()),
        }
    }
}
