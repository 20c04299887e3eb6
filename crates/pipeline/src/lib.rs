//! Collaborator adapters for the Aurora Airlines voice assistant
//!
//! Concrete implementations of the core traits:
//! - Inference services over HTTP (speech recognition, sentiment,
//!   intent classification, optional speech synthesis)
//! - WAV file capture, plus microphone/speaker I/O with the `device` feature
//! - Console speech (every system utterance is printed)
//! - Line-oriented operator input from stdin

pub mod audio;
pub mod console;
pub mod error;
pub mod inference;
pub mod input;

pub use audio::LocalAudio;
pub use console::ConsoleSpeech;
pub use error::{PipelineError, ServiceKind};
pub use inference::{
    HttpIntentClassifier, HttpSentimentScorer, HttpSynthesizer, HttpTranscriber,
    InferenceClient,
};
pub use input::StdinInput;
