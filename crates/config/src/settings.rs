//! Main settings module

use aurora_ivr_core::VoiceConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{audio, dialogue, endpoints, transcript};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Speech synthesis rate and volume
    #[serde(default)]
    pub voice: VoiceConfig,

    #[serde(default)]
    pub audio: AudioSettings,

    #[serde(default)]
    pub dialogue: DialogueSettings,

    /// Inference services (STT, sentiment, classifier, optional TTS)
    #[serde(default)]
    pub services: ServicesConfig,

    #[serde(default)]
    pub transcript: TranscriptSettings,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Optional YAML file overriding the built-in domain content
    #[serde(default)]
    pub domain_config_path: Option<String>,
}

/// Audio capture and playback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Device recording length in seconds
    #[serde(default = "default_record_seconds")]
    pub record_seconds: u64,

    /// Working copy of the caller's query
    #[serde(default = "default_query_wav")]
    pub query_wav_path: String,

    /// Working copy of the confirmation reply
    #[serde(default = "default_response_wav")]
    pub response_wav_path: String,

    /// Cue played on closing and escalation
    #[serde(default = "default_hold_music")]
    pub hold_music_path: String,
}

fn default_sample_rate() -> u32 {
    audio::SAMPLE_RATE
}

fn default_channels() -> u16 {
    audio::CHANNELS
}

fn default_record_seconds() -> u64 {
    audio::RECORD_SECONDS
}

fn default_query_wav() -> String {
    audio::QUERY_WAV.to_string()
}

fn default_response_wav() -> String {
    audio::RESPONSE_WAV.to_string()
}

fn default_hold_music() -> String {
    audio::HOLD_MUSIC_WAV.to_string()
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            record_seconds: default_record_seconds(),
            query_wav_path: default_query_wav(),
            response_wav_path: default_response_wav(),
            hold_music_path: default_hold_music(),
        }
    }
}

impl AudioSettings {
    pub fn record_duration(&self) -> Duration {
        Duration::from_secs(self.record_seconds)
    }
}

/// Retry caps and response randomness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueSettings {
    /// Attempts at the record/file choice before escalating
    #[serde(default = "default_max_input_attempts")]
    pub max_input_attempts: u32,

    /// Confirmation rounds, counting the first question
    #[serde(default = "default_max_confirmation_rounds")]
    pub max_confirmation_rounds: u32,

    /// Escalate when confirmation rounds run out (otherwise end unresolved)
    #[serde(default = "default_true")]
    pub escalate_unresolved: bool,

    /// Fixed seed for response selection; entropy when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_max_input_attempts() -> u32 {
    dialogue::MAX_INPUT_ATTEMPTS
}

fn default_max_confirmation_rounds() -> u32 {
    dialogue::MAX_CONFIRMATION_ROUNDS
}

fn default_true() -> bool {
    true
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            max_input_attempts: default_max_input_attempts(),
            max_confirmation_rounds: default_max_confirmation_rounds(),
            escalate_unresolved: true,
            rng_seed: None,
        }
    }
}

/// Which synthesis backend speaks system prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TtsBackend {
    /// Print to the console only
    #[default]
    Console,
    /// Synthesize through the inference endpoint and play on the output device
    Http,
}

/// Inference service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the inference API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    #[serde(default = "default_sentiment_model")]
    pub sentiment_model: String,

    #[serde(default = "default_classifier_model")]
    pub classifier_model: String,

    #[serde(default)]
    pub tts_backend: TtsBackend,

    #[serde(default)]
    pub tts_model: Option<String>,
}

fn default_endpoint() -> String {
    std::env::var("AURORA_IVR_INFERENCE_URL")
        .unwrap_or_else(|_| endpoints::INFERENCE_DEFAULT.to_string())
}

fn default_api_key() -> Option<String> {
    std::env::var("HF_API_TOKEN").ok().filter(|k| !k.is_empty())
}

fn default_timeout_secs() -> u64 {
    endpoints::TIMEOUT_SECS
}

fn default_stt_model() -> String {
    endpoints::STT_MODEL.to_string()
}

fn default_sentiment_model() -> String {
    endpoints::SENTIMENT_MODEL.to_string()
}

fn default_classifier_model() -> String {
    endpoints::CLASSIFIER_MODEL.to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            timeout_secs: default_timeout_secs(),
            stt_model: default_stt_model(),
            sentiment_model: default_sentiment_model(),
            classifier_model: default_classifier_model(),
            tts_backend: TtsBackend::default(),
            tts_model: None,
        }
    }
}

impl ServicesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Conversation transcript log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_log_path")]
    pub path: String,
}

fn default_log_path() -> String {
    transcript::LOG_PATH.to_string()
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_log_path(),
        }
    }
}

/// Diagnostic logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (json or pretty)
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_voice()?;
        self.validate_audio()?;
        self.validate_dialogue()?;
        self.validate_services()?;
        Ok(())
    }

    fn validate_voice(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.voice.volume) {
            return Err(ConfigError::InvalidValue {
                field: "voice.volume".to_string(),
                message: format!("Must be between 0.0 and 1.0, got {}", self.voice.volume),
            });
        }
        if self.voice.rate == 0 {
            return Err(ConfigError::InvalidValue {
                field: "voice.rate".to_string(),
                message: "Speaking rate must be positive".to_string(),
            });
        }
        Ok(())
    }

    fn validate_audio(&self) -> Result<(), ConfigError> {
        if self.audio.record_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "audio.record_seconds".to_string(),
                message: "Recording duration must be at least 1 second".to_string(),
            });
        }
        if self.audio.sample_rate < 8000 {
            return Err(ConfigError::InvalidValue {
                field: "audio.sample_rate".to_string(),
                message: format!("Sample rate too low: {}", self.audio.sample_rate),
            });
        }
        if self.audio.channels == 0 {
            return Err(ConfigError::InvalidValue {
                field: "audio.channels".to_string(),
                message: "At least one channel required".to_string(),
            });
        }
        Ok(())
    }

    fn validate_dialogue(&self) -> Result<(), ConfigError> {
        if self.dialogue.max_input_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dialogue.max_input_attempts".to_string(),
                message: "Must allow at least one attempt".to_string(),
            });
        }
        if self.dialogue.max_confirmation_rounds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dialogue.max_confirmation_rounds".to_string(),
                message: "Must allow at least one round".to_string(),
            });
        }
        Ok(())
    }

    fn validate_services(&self) -> Result<(), ConfigError> {
        if self.services.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("services.endpoint".to_string()));
        }
        if self.services.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "services.timeout_secs".to_string(),
                message: "Timeout must be positive".to_string(),
            });
        }
        if self.environment.is_production() && self.services.api_key.is_none() {
            return Err(ConfigError::MissingField("services.api_key".to_string()));
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars (`AURORA_IVR__SECTION__FIELD`) > config/{env} >
/// config/default > built-in defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("AURORA_IVR")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
