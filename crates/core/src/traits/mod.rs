//! Collaborator traits consumed by the dialogue orchestrator
//!
//! Every external capability sits behind one of these traits so it can be
//! swapped (HTTP inference service, local device, test fake) without
//! touching the dialogue logic.
//!
//! ```text
//! Speech:
//!   - SpeechToText: audio → transcript text
//!   - TextToSpeech: text → spoken output (fire-and-forget)
//!
//! Audio I/O:
//!   - AudioRecorder: capture from a device or a WAV file
//!   - AudioPlayer: play a buffer (closing / hold cue)
//!
//! Analysis:
//!   - SentimentScorer: text → {label, raw score}
//!   - IntentClassifier: prompt + utterance → {label}
//!
//! Session:
//!   - TranscriptLog: append-only conversation log
//!   - OperatorInput: line-based console input
//! ```

mod analysis;
mod audio_io;
mod input;
mod speech;
mod transcript;

pub use analysis::{ClassifierLabel, IntentClassifier, RawSentiment, SentimentScorer};
pub use audio_io::{AudioPlayer, AudioRecorder};
pub use input::OperatorInput;
pub use speech::{SpeechToText, TextToSpeech};
pub use transcript::TranscriptLog;
