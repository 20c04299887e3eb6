//! Confirmation reply vocabulary

use serde::{Deserialize, Serialize};

/// Words that mark a spoken yes/no reply
///
/// Hedge phrases are masked out before the affirmative and negative
/// lists are scanned, so "not sure" never counts as "sure" or "no".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyKeywords {
    pub affirmative: Vec<String>,
    pub negative: Vec<String>,
    pub hedges: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for ReplyKeywords {
    fn default() -> Self {
        Self {
            affirmative: owned(&[
                "yes",
                "yeah",
                "yep",
                "sure",
                "correct",
                "true",
                "right",
                "affirmative",
                "okay",
                "ok",
                "absolutely",
            ]),
            negative: owned(&[
                "no",
                "nope",
                "incorrect",
                "wrong",
                "not really",
                "nah",
                "negative",
            ]),
            hedges: owned(&[
                "not sure",
                "maybe",
                "perhaps",
                "don't know",
                "dont know",
                "not certain",
            ]),
        }
    }
}

impl ReplyKeywords {
    /// Lowercased copy with blank entries dropped
    pub fn normalized(&self) -> Self {
        fn clean(words: &[String]) -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        }
        Self {
            affirmative: clean(&self.affirmative),
            negative: clean(&self.negative),
            hedges: clean(&self.hedges),
        }
    }
}
