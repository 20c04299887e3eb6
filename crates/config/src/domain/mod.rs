//! Domain configuration: lexicon, response bank, prompts, label map
//!
//! Built-in defaults carry the Aurora Airlines content. A YAML file may
//! override any section; sections it omits keep their defaults.

mod labels;
mod lexicon;
mod prompts;
mod replies;
mod responses;

pub use labels::{LabelMap, LabelTarget};
pub use lexicon::{KeywordTable, LexiconEntry};
pub use prompts::PromptsConfig;
pub use replies::ReplyKeywords;
pub use responses::ResponseBank;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors when loading or validating domain configuration
#[derive(Error, Debug)]
pub enum DomainConfigError {
    #[error("Domain config not found at {0}: {1}")]
    FileNotFound(String, String),

    #[error("Failed to parse domain config: {0}")]
    ParseError(String),

    #[error("Invalid domain config: {0}")]
    Invalid(String),
}

/// Static conversation content, loaded once at startup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub lexicon: KeywordTable,
    pub responses: ResponseBank,
    pub prompts: PromptsConfig,
    pub labels: LabelMap,
    pub replies: ReplyKeywords,
}

impl DomainConfig {
    /// Load from a YAML file and validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomainConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DomainConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| DomainConfigError::ParseError(e.to_string()))?;
        config.validate()?;

        tracing::info!(
            path = %path.as_ref().display(),
            categories = config.lexicon.entries().len(),
            labels = config.labels.len(),
            "Loaded domain configuration"
        );
        Ok(config)
    }

    /// Load `path` when given, otherwise use built-in defaults
    pub fn load_or_default(path: Option<&str>) -> Result<Self, DomainConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), DomainConfigError> {
        self.responses.validate()?;

        for entry in self.lexicon.entries() {
            if self.responses.candidates(entry.category).is_empty() {
                return Err(DomainConfigError::Invalid(format!(
                    "lexicon category '{}' has no responses",
                    entry.category
                )));
            }
        }

        let replies = self.replies.normalized();
        if replies.affirmative.is_empty() || replies.negative.is_empty() {
            return Err(DomainConfigError::Invalid(
                "replies need at least one affirmative and one negative keyword".to_string(),
            ));
        }

        if !self.prompts.confirmation_question.contains("{intent}") {
            return Err(DomainConfigError::Invalid(
                "prompts.confirmation_question must contain '{intent}'".to_string(),
            ));
        }
        Ok(())
    }
}
