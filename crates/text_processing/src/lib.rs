//! Text analysis for the Aurora Airlines voice assistant
//!
//! This crate turns transcribed caller text into dialogue decisions:
//! - **Sentiment Gate**: raw sentiment score to compound score, escalate or continue
//! - **Intent Resolution**: keyword lexicon first, fallback classifier second
//! - **Confirmation Replies**: yes/no/ambiguous classification of a spoken reply
//!
//! # Example
//!
//! ```ignore
//! use aurora_ivr_text_processing::{IntentResolver, SentimentGate};
//!
//! let gate = SentimentGate::new(scorer);
//! let sentiment = gate.evaluate("I'd like to book a flight").await?;
//! if !SentimentGate::should_escalate(&sentiment) {
//!     let intent = resolver.resolve("I'd like to book a flight").await?;
//! }
//! ```

pub mod confirmation;
pub mod intent;
pub mod sentiment;

pub use confirmation::{ReplyClassifier, ReplyKeywords};
pub use intent::{
    ClassifierFallback, IntentMatch, IntentResolver, IntentSource, KeywordMatcher,
    ResolutionError,
};
pub use sentiment::{SentimentDecision, SentimentGate};
