//! Adapter errors

use thiserror::Error;

/// Which inference service an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Transcription,
    Sentiment,
    Classifier,
    Synthesis,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transcription => "transcription",
            Self::Sentiment => "sentiment",
            Self::Classifier => "classifier",
            Self::Synthesis => "synthesis",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Connection refused, DNS failure, timeout
    #[error("{service} service unreachable: {message}")]
    Unreachable { service: ServiceKind, message: String },

    #[error("{service} service returned {status}: {body}")]
    Status {
        service: ServiceKind,
        status: u16,
        body: String,
    },

    #[error("Unexpected {service} response: {message}")]
    Response { service: ServiceKind, message: String },

    #[error("Audio capture error: {0}")]
    Capture(String),

    #[error("Audio playback error: {0}")]
    Playback(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl PipelineError {
    /// Service is down or overloaded rather than rejecting this request
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Unreachable { .. } => true,
            Self::Status { status, .. } => *status == 503 || *status == 502 || *status == 504,
            _ => false,
        }
    }

    fn service(&self) -> Option<ServiceKind> {
        match self {
            Self::Unreachable { service, .. }
            | Self::Status { service, .. }
            | Self::Response { service, .. } => Some(*service),
            _ => None,
        }
    }
}

impl From<PipelineError> for aurora_ivr_core::Error {
    fn from(err: PipelineError) -> Self {
        use aurora_ivr_core::Error;

        let unavailable = err.is_unavailable();
        let message = err.to_string();
        match (err.service(), err) {
            (Some(ServiceKind::Transcription), _) => Error::Transcription(message),
            (Some(ServiceKind::Synthesis), _) => Error::Synthesis(message),
            (Some(service), _) if unavailable => Error::unavailable(service.as_str(), message),
            (Some(ServiceKind::Sentiment), _) => Error::Sentiment(message),
            (Some(ServiceKind::Classifier), _) => Error::Classifier(message),
            (None, PipelineError::Capture(_)) => Error::AudioCapture(message),
            (None, PipelineError::Playback(_)) => Error::AudioPlayback(message),
            (None, PipelineError::Input(_)) => Error::Input(message),
            (None, _) => Error::Config(message),
        }
    }
}
