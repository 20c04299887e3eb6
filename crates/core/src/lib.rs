//! Core traits and types for the Aurora Airlines voice assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Collaborator traits (STT, TTS, audio I/O, sentiment, classifier, transcript log)
//! - Intent categories and conversation types
//! - Audio buffer type and WAV helpers
//! - Error types

pub mod audio;
pub mod conversation;
pub mod error;
pub mod intent;
pub mod traits;
pub mod voice_config;

pub use audio::{AudioBuffer, AudioSource, SPEECH_SAMPLE_RATE};
pub use conversation::{
    compound_score, ConfirmationOutcome, ConversationTurn, SentimentResult, TranscriptEntry,
    TurnId, TurnRole, Utterance,
};
pub use error::{Error, Result};
pub use intent::{IntentCategory, UnknownCategory};
pub use voice_config::VoiceConfig;

pub use traits::{
    AudioPlayer, AudioRecorder, ClassifierLabel, IntentClassifier, OperatorInput, RawSentiment,
    SentimentScorer, SpeechToText, TextToSpeech, TranscriptLog,
};
