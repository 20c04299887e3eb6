//! Conversation transcript persistence
//!
//! Provides sinks for the caller-facing transcript:
//! - [`FileTranscriptLog`]: the `logs/transcript_log.txt` text file
//! - [`MemoryTranscriptLog`]: in-process capture for tests and embedding
//! - [`DisabledTranscriptLog`]: drops entries when logging is switched off

pub mod error;
pub mod transcript;

pub use error::PersistenceError;
pub use transcript::{DisabledTranscriptLog, FileTranscriptLog, MemoryTranscriptLog};
