//! Configuration management for the Aurora Airlines voice assistant
//!
//! Supports loading configuration from:
//! - TOML/YAML files (config/default, config/{env})
//! - Environment variables (AURORA_IVR__ prefix)
//! - Built-in defaults (the assistant runs with no file at all)
//!
//! Domain content (intent lexicon, response bank, prompts, classifier
//! label map) lives in [`domain::DomainConfig`].

pub mod constants;
pub mod domain;
pub mod settings;

pub use domain::{
    DomainConfig, DomainConfigError, KeywordTable, LabelMap, LabelTarget, LexiconEntry,
    PromptsConfig, ReplyKeywords, ResponseBank,
};
pub use settings::{
    load_settings, AudioSettings, DialogueSettings, ObservabilityConfig, RuntimeEnvironment,
    ServicesConfig, Settings, TranscriptSettings, TtsBackend,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Domain configuration error: {0}")]
    Domain(#[from] DomainConfigError),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for aurora_ivr_core::Error {
    fn from(err: ConfigError) -> Self {
        aurora_ivr_core::Error::Config(err.to_string())
    }
}
