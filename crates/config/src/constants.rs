//! Centralized constants for the voice assistant
//!
//! Values that are policy, not configuration. Anything an operator may
//! tune lives in `Settings` instead.

/// Sentiment gate policy
pub mod sentiment {
    /// A compound score strictly below this escalates immediately,
    /// before any intent resolution
    pub const ESCALATION_THRESHOLD: f32 = -0.7;
}

/// Audio defaults
pub mod audio {
    /// Capture rate for speech recognition (Hz)
    pub const SAMPLE_RATE: u32 = 16_000;

    /// Capture channels
    pub const CHANNELS: u16 = 1;

    /// Length of a device recording (seconds)
    pub const RECORD_SECONDS: u64 = 3;

    /// Working file for the caller's query
    pub const QUERY_WAV: &str = "user_query.wav";

    /// Working file for the caller's confirmation reply
    pub const RESPONSE_WAV: &str = "user_response.wav";

    /// Hold music played on closing and escalation
    pub const HOLD_MUSIC_WAV: &str = "out_music.wav";
}

/// Dialogue retry caps
pub mod dialogue {
    /// Attempts at choosing "record" or "file" before escalating
    pub const MAX_INPUT_ATTEMPTS: u32 = 3;

    /// Confirmation rounds (initial question plus clarifications)
    pub const MAX_CONFIRMATION_ROUNDS: u32 = 2;
}

/// Inference service defaults
pub mod endpoints {
    /// Hugging Face style inference API
    pub const INFERENCE_DEFAULT: &str = "https://api-inference.huggingface.co";

    pub const STT_MODEL: &str = "openai/whisper-base";

    pub const SENTIMENT_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";

    pub const CLASSIFIER_MODEL: &str = "distilbert/distilbert-base-uncased";

    /// Request timeout (seconds)
    pub const TIMEOUT_SECS: u64 = 30;
}

/// Transcript log defaults
pub mod transcript {
    pub const LOG_PATH: &str = "logs/transcript_log.txt";
}
