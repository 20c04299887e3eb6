//! Keyword lexicon matcher

use async_trait::async_trait;
use aurora_ivr_config::KeywordTable;
use aurora_ivr_core::IntentCategory;

use super::{IntentMatch, IntentSource};

/// First-match-wins substring matcher over a [`KeywordTable`]
///
/// Categories are tried in table order; within a category any keyword
/// occurring as a case-insensitive substring is a match.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    table: KeywordTable,
}

impl KeywordMatcher {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// Synchronous lookup, also used by tests and diagnostics
    pub fn find(&self, utterance: &str) -> Option<IntentCategory> {
        let text = utterance.to_lowercase();
        self.table
            .entries()
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|entry| entry.category)
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}

#[async_trait]
impl IntentSource for KeywordMatcher {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn match_intent(&self, utterance: &str) -> aurora_ivr_core::Result<IntentMatch> {
        Ok(match self.find(utterance) {
            Some(category) => IntentMatch::Matched(category),
            None => IntentMatch::NoMatch,
        })
    }
}
