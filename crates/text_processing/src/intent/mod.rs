//! Intent resolution
//!
//! An ordered chain of [`IntentSource`]s. The keyword lexicon runs first;
//! the fallback classifier is consulted only when no keyword matched.
//! The first source to report a match wins; when every source declines,
//! the utterance resolves to [`IntentCategory::Unknown`].

mod classifier;
mod keyword;

pub use classifier::ClassifierFallback;
pub use keyword::KeywordMatcher;

use async_trait::async_trait;
use aurora_ivr_core::IntentCategory;
use thiserror::Error;

/// Typed result of one source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentMatch {
    Matched(IntentCategory),
    NoMatch,
}

/// Resolution failed, as opposed to resolving to `unknown`
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("intent source '{source_name}' failed: {error}")]
    SourceFailed {
        source_name: String,
        #[source]
        error: aurora_ivr_core::Error,
    },
}

impl From<ResolutionError> for aurora_ivr_core::Error {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::SourceFailed { error, .. } => error,
        }
    }
}

/// One link in the resolution chain
#[async_trait]
pub trait IntentSource: Send + Sync {
    /// Source name for logs
    fn name(&self) -> &str;

    async fn match_intent(&self, utterance: &str) -> aurora_ivr_core::Result<IntentMatch>;
}

/// Chain of intent sources tried in order
pub struct IntentResolver {
    sources: Vec<Box<dyn IntentSource>>,
}

impl IntentResolver {
    /// Empty chain; every utterance resolves to `unknown`
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Keyword lexicon first, classifier fallback second
    pub fn keyword_then_classifier(keywords: KeywordMatcher, fallback: ClassifierFallback) -> Self {
        Self::new().with_source(keywords).with_source(fallback)
    }

    /// Append a source to the end of the chain
    pub fn with_source(mut self, source: impl IntentSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Resolve an utterance to a category, or `unknown`
    pub async fn resolve(&self, utterance: &str) -> Result<IntentCategory, ResolutionError> {
        for source in &self.sources {
            let outcome = source.match_intent(utterance).await.map_err(|error| {
                tracing::warn!(source = source.name(), error = %error, "Intent source failed");
                ResolutionError::SourceFailed {
                    source_name: source.name().to_string(),
                    error,
                }
            })?;

            match outcome {
                IntentMatch::Matched(category) => {
                    tracing::debug!(source = source.name(), intent = %category, "Intent resolved");
                    return Ok(category);
                }
                IntentMatch::NoMatch => {
                    tracing::debug!(source = source.name(), "No match, trying next source");
                }
            }
        }

        tracing::debug!("No source matched, intent is unknown");
        Ok(IntentCategory::Unknown)
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new()
    }
}
