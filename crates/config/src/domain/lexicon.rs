//! Intent lexicon: trigger keywords per intent category
//!
//! Entries are kept in declaration order. Resolution is first-match-wins,
//! so the order of entries is the tie-break when a keyword (e.g. "flight")
//! appears under more than one category.

use aurora_ivr_core::IntentCategory;
use serde::{Deserialize, Serialize};

use super::DomainConfigError;

/// Keywords for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub category: IntentCategory,
    pub keywords: Vec<String>,
}

/// Ordered mapping from intent category to trigger strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LexiconEntry>", into = "Vec<LexiconEntry>")]
pub struct KeywordTable {
    entries: Vec<LexiconEntry>,
}

impl KeywordTable {
    /// Build a table, lowercasing keywords and validating the layout
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self, DomainConfigError> {
        let mut seen = Vec::with_capacity(entries.len());
        let mut normalized = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.category.is_unknown() {
                return Err(DomainConfigError::Invalid(
                    "lexicon cannot declare keywords for 'unknown'".to_string(),
                ));
            }
            if seen.contains(&entry.category) {
                return Err(DomainConfigError::Invalid(format!(
                    "lexicon declares '{}' more than once",
                    entry.category
                )));
            }
            seen.push(entry.category);

            let keywords: Vec<String> = entry
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if keywords.is_empty() {
                return Err(DomainConfigError::Invalid(format!(
                    "lexicon entry '{}' has no keywords",
                    entry.category
                )));
            }
            normalized.push(LexiconEntry {
                category: entry.category,
                keywords,
            });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    #[cfg(test)]
    fn keywords_for(&self, category: IntentCategory) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.keywords.as_slice())
    }

    /// Categories that list `keyword`, in declaration order
    #[cfg(test)]
    fn categories_with(&self, keyword: &str) -> Vec<IntentCategory> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.keywords.iter().any(|k| *k == keyword))
            .map(|e| e.category)
            .collect()
    }
}

impl TryFrom<Vec<LexiconEntry>> for KeywordTable {
    type Error = DomainConfigError;

    fn try_from(entries: Vec<LexiconEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<KeywordTable> for Vec<LexiconEntry> {
    fn from(table: KeywordTable) -> Self {
        table.entries
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        fn entry(category: IntentCategory, keywords: &[&str]) -> LexiconEntry {
            LexiconEntry {
                category,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        Self {
            entries: vec![
                entry(
                    IntentCategory::Booking,
                    &["book", "reserve", "flight", "flights", "to", "from"],
                ),
                entry(
                    IntentCategory::FlightStatus,
                    &[
                        "status", "flight", "delay", "cancel", "late", "delayed", "arrive",
                        "arrival", "time", "depart", "departure",
                    ],
                ),
                entry(
                    IntentCategory::GeneralInformation,
                    &[
                        "information", "policy", "route", "airline", "offer", "offers", "pets",
                        "meal", "food", "allowances",
                    ],
                ),
                entry(
                    IntentCategory::FrequentFlyer,
                    &["frequent flyer", "miles", "rewards", "points", "perks", "benefits"],
                ),
                entry(
                    IntentCategory::BaggageInformation,
                    &[
                        "baggage", "luggage", "carry on", "checked", "allowance", "bag", "weight",
                    ],
                ),
            ],
        }
    }
}
